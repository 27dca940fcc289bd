use bbox_client::utils::config::{get_env_or_default, get_env_or_none};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("BBOX_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("BBOX_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("BBOX_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("BBOX_TEST_MISSING_VAR");
        let result: String = get_env_or_default("BBOX_TEST_MISSING_VAR", "default".to_string());
        assert_eq!(result, "default");
    }
}

#[test]
fn test_get_env_or_default_with_integer() {
    unsafe {
        env::set_var("BBOX_TEST_VAR_INT", " 42 ");
        let result: u64 = get_env_or_default("BBOX_TEST_VAR_INT", 0);
        assert_eq!(result, 42);
        env::remove_var("BBOX_TEST_VAR_INT");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("BBOX_TEST_VAR_INVALID", "ten");
        let result: u64 = get_env_or_default("BBOX_TEST_VAR_INVALID", 10);
        assert_eq!(result, 10);
        env::remove_var("BBOX_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_default_with_blank_value() {
    unsafe {
        env::set_var("BBOX_TEST_VAR_BLANK", "   ");
        let result: String = get_env_or_default("BBOX_TEST_VAR_BLANK", "default".to_string());
        assert_eq!(result, "default");
        env::remove_var("BBOX_TEST_VAR_BLANK");
    }
}

#[test]
fn test_get_env_or_none_with_existing_var() {
    unsafe {
        env::set_var("BBOX_TEST_VAR_OPTION", "123");
        let result: Option<i32> = get_env_or_none("BBOX_TEST_VAR_OPTION");
        assert_eq!(result, Some(123));
        env::remove_var("BBOX_TEST_VAR_OPTION");
    }
}

#[test]
fn test_get_env_or_none_with_missing_or_invalid() {
    unsafe {
        env::remove_var("BBOX_TEST_VAR_NONE");
        let missing: Option<i32> = get_env_or_none("BBOX_TEST_VAR_NONE");
        assert_eq!(missing, None);

        env::set_var("BBOX_TEST_VAR_NONE", "abc");
        let invalid: Option<i32> = get_env_or_none("BBOX_TEST_VAR_NONE");
        assert_eq!(invalid, None);
        env::remove_var("BBOX_TEST_VAR_NONE");
    }
}

#[test]
fn test_get_env_or_none_trims_and_treats_blank_as_missing() {
    unsafe {
        env::set_var("BBOX_TEST_VAR_PADDED", " 15 ");
        let padded: Option<u64> = get_env_or_none("BBOX_TEST_VAR_PADDED");
        assert_eq!(padded, Some(15));

        env::set_var("BBOX_TEST_VAR_PADDED", "  ");
        let blank: Option<u64> = get_env_or_none("BBOX_TEST_VAR_PADDED");
        assert_eq!(blank, None);
        env::remove_var("BBOX_TEST_VAR_PADDED");
    }
}
