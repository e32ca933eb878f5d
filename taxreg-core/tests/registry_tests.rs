//! Register behavior: creation rules, removal finality, accounting through
//! both locators, audit, and failure atomicity.

use rstest::rstest;
use taxreg_core::{AccountId, RegistryError, TaxRegister};

fn populated() -> TaxRegister {
    let mut reg = TaxRegister::new();
    assert!(reg.create("John Smith", "Oak Road 23", "123"));
    assert!(reg.create("Jane H", "Main St 17", "Xuj"));
    reg
}

// ---------------------------------------------------------------------------
// 1. The worked example, verbatim
// ---------------------------------------------------------------------------

#[test]
fn worked_example() {
    let mut reg = TaxRegister::new();
    assert!(reg.create("John Smith", "Oak Road 23", "123"));
    assert!(reg.create("Jane H", "Main St 17", "Xuj"));
    assert!(reg.record_income("123", 3000));
    assert!(reg.record_expense(("John Smith", "Oak Road 23"), 500));

    let audit = reg.audit("John Smith", "Oak Road 23").expect("registered");
    assert_eq!(audit.account, AccountId::from("123"));
    assert_eq!(audit.total_income, 3000);
    assert_eq!(audit.total_expense, 500);

    assert!(!reg.create("John Smith", "Oak Road 23", "999"), "duplicate identity");
    assert!(reg.remove("Jane H", "Main St 17"));
    assert!(reg.audit("Jane H", "Main St 17").is_none());
}

// ---------------------------------------------------------------------------
// 2. Uniqueness
// ---------------------------------------------------------------------------

#[test]
fn same_name_different_address_is_a_different_person() {
    let mut reg = TaxRegister::new();
    assert!(reg.create("John Smith", "Oak Road 23", "a"));
    assert!(reg.create("John Smith", "Oak Road 24", "b"));
    assert_eq!(reg.len(), 2);
    assert_eq!(reg.audit("John Smith", "Oak Road 23").unwrap().account, AccountId::from("a"));
    assert_eq!(reg.audit("John Smith", "Oak Road 24").unwrap().account, AccountId::from("b"));
}

#[test]
fn duplicate_account_declines_even_for_new_identity() {
    let mut reg = populated();
    let err = reg.try_create("Fresh Name", "Fresh Addr", "123").unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateAccount { .. }), "got: {err}");
    assert_eq!(reg.len(), 2);
    assert!(reg.audit("Fresh Name", "Fresh Addr").is_none(), "no partial insert");
}

#[test]
fn identity_takes_precedence_when_both_keys_collide() {
    let mut reg = populated();
    let err = reg.try_create("John Smith", "Oak Road 23", "123").unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateIdentity { .. }), "got: {err}");
}

#[test]
fn empty_strings_are_valid_keys() {
    let mut reg = TaxRegister::new();
    assert!(reg.create("", "", ""));
    assert!(!reg.create("", "", "other"), "empty identity is taken like any other");
    assert!(reg.record_income("", 10));
    let audit = reg.audit("", "").expect("registered");
    assert_eq!(audit.account, AccountId::from(""));
    assert_eq!(audit.total_income, 10);
}

// ---------------------------------------------------------------------------
// 3. Locator symmetry
// ---------------------------------------------------------------------------

#[rstest]
#[case::by_account(true)]
#[case::by_identity(false)]
fn income_agrees_across_locators(#[case] by_account: bool) {
    let mut reg = populated();
    if by_account {
        assert!(reg.record_income("123", 4200));
    } else {
        assert!(reg.record_income(("John Smith", "Oak Road 23"), 4200));
    }
    assert_eq!(reg.audit("John Smith", "Oak Road 23").unwrap().total_income, 4200);
}

#[test]
fn interleaved_locators_accumulate_on_one_record() {
    let mut reg = populated();
    assert!(reg.record_income("123", 100));
    assert!(reg.record_income(("John Smith", "Oak Road 23"), 200));
    assert!(reg.record_expense("123", 30));
    assert!(reg.record_expense(("John Smith", "Oak Road 23"), 40));

    let audit = reg.audit("John Smith", "Oak Road 23").expect("registered");
    assert_eq!(audit.total_income, 300);
    assert_eq!(audit.total_expense, 70);

    // The other person is untouched.
    let jane = reg.audit("Jane H", "Main St 17").expect("registered");
    assert_eq!((jane.total_income, jane.total_expense), (0, 0));
}

#[test]
fn negative_and_zero_amounts_are_accepted() {
    let mut reg = populated();
    assert!(reg.record_income("123", -250));
    assert!(reg.record_income("123", 0));
    assert!(reg.record_expense("123", -1));
    let audit = reg.audit("John Smith", "Oak Road 23").expect("registered");
    assert_eq!(audit.total_income, -250);
    assert_eq!(audit.total_expense, -1);
}

// ---------------------------------------------------------------------------
// 4. Removal finality
// ---------------------------------------------------------------------------

#[test]
fn removal_frees_both_keys_for_reuse() {
    let mut reg = populated();
    assert!(reg.remove("Jane H", "Main St 17"));
    assert!(reg.audit("Jane H", "Main St 17").is_none());
    assert!(!reg.record_income("Xuj", 1), "account locator dead after removal");

    // Identity reusable with a fresh account, and the old account id
    // reusable by someone else entirely.
    assert!(reg.create("Jane H", "Main St 17", "new-acct"));
    assert!(reg.create("Someone New", "Pine St 9", "Xuj"));

    // The re-registration starts from zero.
    let audit = reg.audit("Jane H", "Main St 17").expect("re-registered");
    assert_eq!((audit.total_income, audit.total_expense), (0, 0));
}

#[test]
fn remove_is_not_repeatable() {
    let mut reg = populated();
    assert!(reg.remove("Jane H", "Main St 17"));
    assert!(!reg.remove("Jane H", "Main St 17"));
    assert_eq!(reg.len(), 1);
}

// ---------------------------------------------------------------------------
// 5. Idempotent failure
// ---------------------------------------------------------------------------

#[test]
fn failed_operations_leave_state_unchanged() {
    let mut reg = populated();
    assert!(reg.record_income("123", 3000));

    let before: Vec<_> = reg.list_by_identity().collect();

    assert!(!reg.remove("Nobody", "Nowhere"));
    assert!(!reg.record_income("no-such-account", 999));
    assert!(!reg.record_expense(("Nobody", "Nowhere"), 999));
    assert!(reg.audit("Nobody", "Nowhere").is_none());
    assert!(!reg.create("John Smith", "Oak Road 23", "fresh"));
    assert!(!reg.create("Fresh Name", "Fresh Addr", "123"));

    let after: Vec<_> = reg.list_by_identity().collect();
    assert_eq!(before, after);
    assert_eq!(reg.audit("John Smith", "Oak Road 23").unwrap().total_income, 3000);
}

#[test]
fn failure_kinds_are_distinguishable_through_try_forms() {
    let mut reg = populated();
    assert!(matches!(
        reg.try_create("John Smith", "Oak Road 23", "zzz"),
        Err(RegistryError::DuplicateIdentity { .. })
    ));
    assert!(matches!(
        reg.try_create("Fresh Name", "Fresh Addr", "Xuj"),
        Err(RegistryError::DuplicateAccount { .. })
    ));
    assert!(matches!(reg.try_remove("Nobody", "Nowhere"), Err(RegistryError::NotFound)));
    assert!(matches!(reg.try_audit("Nobody", "Nowhere"), Err(RegistryError::NotFound)));
    assert!(matches!(
        reg.try_record_expense("no-such-account", 5),
        Err(RegistryError::NotFound)
    ));
}
