use flood_registry::{
    assess_and_verify,
    insurance::{InsuranceError, InsuranceVerificationContract, InsuranceVerificationContractClient},
    risk::{RiskAssessmentContract, RiskAssessmentContractClient, RiskError},
    CoverageCheck, CoverageCheckError,
};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env, String,
};

struct TestEnvironment {
    env: Env,
    owner: Address,
    assessor: Address,
    risk_id: Address,
    insurance_id: Address,
}

impl TestEnvironment {
    fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_sequence_number(1);

        let owner = Address::generate(&env);
        let assessor = Address::generate(&env);

        let risk_id = env.register(RiskAssessmentContract, ());
        let insurance_id = env.register(InsuranceVerificationContract, ());

        RiskAssessmentContractClient::new(&env, &risk_id).initialize(&owner);
        InsuranceVerificationContractClient::new(&env, &insurance_id).initialize(&owner);

        Self {
            env,
            owner,
            assessor,
            risk_id,
            insurance_id,
        }
    }

    fn risk(&self) -> RiskAssessmentContractClient<'_> {
        RiskAssessmentContractClient::new(&self.env, &self.risk_id)
    }

    fn insurance(&self) -> InsuranceVerificationContractClient<'_> {
        InsuranceVerificationContractClient::new(&self.env, &self.insurance_id)
    }

    fn authorize_assessor_everywhere(&self) {
        self.risk().add_authorized(&self.owner, &self.assessor);
        self.insurance().add_authorized(&self.owner, &self.assessor);
    }

    fn register_policy(&self, property_id: u64, coverage_amount: u128, expiration_date: u32) {
        self.insurance().register_insurance_policy(
            &property_id,
            &String::from_str(&self.env, "FLD-7731"),
            &String::from_str(&self.env, "Delta Flood Mutual"),
            &coverage_amount,
            &expiration_date,
        );
    }
}

#[test]
fn test_score_flows_from_risk_engine_into_verification() {
    let t = TestEnvironment::new();
    t.authorize_assessor_everywhere();
    t.register_policy(11, 600_000, 500);

    let score = t.risk().assess_risk(&t.assessor, &11, &12, &4);
    assert_eq!(score, 70);

    assert!(t
        .insurance()
        .verify_insurance_policy(&t.assessor, &11, &score, &1_000_000));
    assert!(t.insurance().is_insurance_verified(&11));
    assert!(t.insurance().has_adequate_coverage(&11));
}

#[test]
fn test_registries_are_independent_per_engine() {
    let t = TestEnvironment::new();
    t.risk().add_authorized(&t.owner, &t.assessor);
    t.register_policy(11, 600_000, 500);

    let score = t.risk().assess_risk(&t.assessor, &11, &12, &4);
    assert_eq!(
        t.insurance()
            .try_verify_insurance_policy(&t.assessor, &11, &score, &1_000_000),
        Err(Ok(InsuranceError::NotAuthorized))
    );
    assert!(!t.insurance().is_insurance_verified(&11));
}

#[test]
fn test_assess_and_verify() {
    let t = TestEnvironment::new();
    t.authorize_assessor_everywhere();
    t.register_policy(11, 550_000, 500);

    let check = assess_and_verify(
        &t.env,
        &t.risk_id,
        &t.insurance_id,
        &t.assessor,
        11,
        5,
        5,
        1_000_000,
    );
    assert_eq!(
        check,
        Ok(CoverageCheck {
            risk_score: 100,
            high_risk: true,
            adequate_coverage: false,
        })
    );
    assert_eq!(t.insurance().get_coverage_gap(&11, &100, &1_000_000), 50_000);
}

#[test]
fn test_assess_and_verify_reports_engine_errors() {
    let t = TestEnvironment::new();
    t.authorize_assessor_everywhere();
    t.register_policy(11, 550_000, 500);

    let invalid = assess_and_verify(&t.env, &t.risk_id, &t.insurance_id, &t.assessor, 11, 5, 6, 1);
    assert_eq!(invalid, Err(CoverageCheckError::Risk(RiskError::InvalidScore)));

    let missing = assess_and_verify(&t.env, &t.risk_id, &t.insurance_id, &t.assessor, 12, 40, 0, 1);
    assert_eq!(missing, Err(CoverageCheckError::Insurance(InsuranceError::PolicyNotFound)));
    // The assessment was still committed
    assert_eq!(t.risk().get_risk_assessment(&12).unwrap().risk_score, 10);
}

#[test]
fn test_flood_events_require_reassessment_before_verification() {
    let t = TestEnvironment::new();
    t.authorize_assessor_everywhere();
    t.register_policy(11, 560_000, 500);

    t.risk().assess_risk(&t.assessor, &11, &20, &3);
    t.risk().record_flood_event(&t.assessor, &11);
    t.risk().record_flood_event(&t.assessor, &11);

    // Stale score still verifies as adequate
    let stale = t.risk().get_risk_assessment(&11).unwrap();
    assert_eq!(stale.risk_score, 60);
    assert_eq!(stale.flood_history_count, 5);
    assert!(t
        .insurance()
        .verify_insurance_policy(&t.assessor, &11, &stale.risk_score, &1_000_000));

    // Fresh score does not
    let fresh = t
        .risk()
        .assess_risk(&t.assessor, &11, &20, &stale.flood_history_count);
    assert_eq!(fresh, 80);
    assert!(!t
        .insurance()
        .verify_insurance_policy(&t.assessor, &11, &fresh, &1_000_000));
}

#[test]
fn test_policy_expires_with_ledger_sequence() {
    let t = TestEnvironment::new();
    t.authorize_assessor_everywhere();
    t.register_policy(11, 600_000, 50);

    let score = t.risk().assess_risk(&t.assessor, &11, &35, &0);
    t.env.ledger().set_sequence_number(50);

    assert_eq!(
        t.insurance()
            .try_verify_insurance_policy(&t.assessor, &11, &score, &1_000_000),
        Err(Ok(InsuranceError::ExpiredPolicy))
    );
}
