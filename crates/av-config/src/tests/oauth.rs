use crate::Config;
use crate::tests::{EnvGuard, TEST_SECRET, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_no_client_id_when_validate_then_oauth_is_disabled_and_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::set("AV_AUTH_JWT_SECRET", TEST_SECRET);
    let _unset = EnvGuard::remove("AV_OAUTH_CLIENT_ID");

    // When
    let config = Config::load().unwrap();

    // Then
    assert!(!config.oauth.enabled());
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_client_id_without_secret_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::set("AV_AUTH_JWT_SECRET", TEST_SECRET);
    let _id = EnvGuard::set("AV_OAUTH_CLIENT_ID", "client-1");
    let _unset = EnvGuard::remove("AV_OAUTH_CLIENT_SECRET");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("client_secret"));
}

#[test]
#[serial]
fn given_full_oauth_config_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::set("AV_AUTH_JWT_SECRET", TEST_SECRET);
    let _id = EnvGuard::set("AV_OAUTH_CLIENT_ID", "client-1");
    let _cs = EnvGuard::set("AV_OAUTH_CLIENT_SECRET", "secret-1");
    let _uri = EnvGuard::set("AV_OAUTH_REDIRECT_URI", "http://localhost:8000/callback");

    // When
    let config = Config::load().unwrap();

    // Then
    assert!(config.oauth.enabled());
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_non_http_token_url_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::set("AV_AUTH_JWT_SECRET", TEST_SECRET);
    let _id = EnvGuard::set("AV_OAUTH_CLIENT_ID", "client-1");
    let _cs = EnvGuard::set("AV_OAUTH_CLIENT_SECRET", "secret-1");
    let _uri = EnvGuard::set("AV_OAUTH_REDIRECT_URI", "http://localhost:8000/callback");
    let _url = EnvGuard::set("AV_OAUTH_TOKEN_URL", "ftp://oauth.example.com/token");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("token_url"));
}
