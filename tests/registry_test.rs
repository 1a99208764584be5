use brewenv::variants::{self, PRODUCTION};
use brewenv::{BrewenvError, registry};

// Registry state is process-wide, so every step lives in one test.
#[test]
fn install_once_then_read_everywhere() {
    assert!(!registry::is_installed());
    assert_eq!(*registry::current(), variants::ACTIVE);

    let mut staging = PRODUCTION.clone();
    staging.api_server_url = "https://api.staging.example".into();

    let installed = registry::install(staging.clone()).unwrap();
    assert_eq!(*installed, staging);
    assert!(registry::is_installed());

    let again = registry::install(PRODUCTION.clone());
    assert!(matches!(again, Err(BrewenvError::AlreadyInstalled)));

    let first = registry::current();
    let second = registry::current();
    assert!(std::ptr::eq(first, second));
    assert_eq!(first.api_server_url, "https://api.staging.example");
}
