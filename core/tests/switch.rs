use std::io;
use tools::{
    init_logging, MyError, MySpecificError, MyValidation, WhateverService, ERROR_MESSAGE,
    SPECIFIC_ERROR_MESSAGE, SUCCESS_MESSAGE, VALIDATION_MESSAGE,
};
use verdict_core::{Error, Failure, Outcome, Success, Switch};
use verdict_macros::Failure;


#[test]
fn test_success_runs_success_case() {
    init_logging();
    let response = WhateverService::get_success();
    let mut executed = false;

    response
        .switch()
        .case::<Success<String>>(|Success(result)| {
            executed = true;
            assert_eq!(result, SUCCESS_MESSAGE);
        })
        .default(|_| panic!("fallback cannot be called in this context"));

    assert!(executed);
}

#[test]
fn test_success_with_return() {
    let response = WhateverService::get_value(21);

    let result = response
        .switch()
        .case::<Success<i32>>(|Success(r)| r * 2)
        .default(|_| panic!("fallback cannot be called in this context"));

    assert_eq!(result, 42);
}

#[test]
fn test_error_runs_matching_case() {
    let response = WhateverService::get_error();
    assert!(response.is_fail());
    assert!(!response.is_success());
    let mut executed = false;

    response
        .switch()
        .case::<Success<String>>(|_| panic!("success cannot be called in this context"))
        .case::<MyValidation>(|_| panic!("validation cannot be called in this context"))
        .case::<MyError>(|error| {
            executed = true;
            assert_eq!(error.message(), ERROR_MESSAGE);
            assert_eq!(error.source.kind(), io::ErrorKind::TimedOut);
        })
        .default(|_| panic!("fallback cannot be called in this context"));

    assert!(executed);
}

#[test]
fn test_validation_runs_validation_case() {
    let response = WhateverService::get_validation();
    let mut executed = false;

    response
        .switch()
        .case::<Success<String>>(|_| panic!("success cannot be called in this context"))
        .case::<MyValidation>(|validation| {
            executed = true;
            assert_eq!(validation.message(), VALIDATION_MESSAGE);
        })
        .default(|_| panic!("fallback cannot be called in this context"));

    assert!(executed);
}

#[test]
fn test_inheritance_only_first_case_runs() {
    let response = WhateverService::get_specific_error();
    let mut executed = false;

    let x = response
        .switch::<i32>()
        .case::<Success<String>>(|_| panic!("success cannot be called in this context"))
        .case::<MySpecificError>(|error| {
            executed = true;
            assert_eq!(error.message(), SPECIFIC_ERROR_MESSAGE);
            0
        })
        .case::<MyError>(|_| panic!("general error cannot be called in this context"))
        .default(|_| panic!("fallback cannot be called in this context"));

    assert!(executed);
    assert_eq!(x, 0);
}

#[test]
fn test_general_case_registered_first_wins() {
    let response = WhateverService::get_specific_error();

    let fired = response
        .switch()
        .case::<MyError>(|error| format!("general: {}", error.message))
        .case::<MySpecificError>(|_| panic!("specific cannot be called in this context"))
        .default(|_| panic!("fallback cannot be called in this context"));

    assert_eq!(fired, format!("general: {}", SPECIFIC_ERROR_MESSAGE));
}

#[test]
fn test_error_without_case_runs_fallback() {
    let response = WhateverService::get_error();
    let mut executed = false;

    response
        .switch()
        .case::<Success<String>>(|_| panic!("success cannot be called in this context"))
        .case::<MyValidation>(|_| panic!("validation cannot be called in this context"))
        .default(|subject| {
            executed = true;
            assert!(!subject.is_success());
            assert!(subject.is_fail());
            assert_eq!(subject.try_get_value::<String>(), None);
        });

    assert!(executed);
}

#[test]
fn test_error_without_case_returns_fallback_value() {
    let response = WhateverService::get_error();
    let mut executed = false;

    let result = response
        .switch::<i32>()
        .case::<Success<String>>(|_| panic!("success cannot be called in this context"))
        .case::<MyValidation>(|_| panic!("validation cannot be called in this context"))
        .default(|subject| {
            executed = true;
            assert!(subject.is_fail());
            0
        });

    assert!(executed);
    assert_eq!(result, 0);
}

#[test]
fn test_success_without_case_runs_fallback() {
    let response = WhateverService::get_success();
    let mut executed = false;

    response
        .switch()
        .case::<MyValidation>(|_| panic!("validation cannot be called in this context"))
        .default(|subject| {
            executed = true;
            assert!(subject.is_success());
            assert!(!subject.is_fail());
            assert_eq!(
                subject.try_get_value::<String>().map(String::as_str),
                Some(SUCCESS_MESSAGE)
            );
        });

    assert!(executed);
}

#[test]
fn test_success_without_case_returns_fallback_value() {
    let value = 17;
    let response = WhateverService::get_value(value);

    let result = response
        .switch()
        .case::<MyValidation>(|_| panic!("validation cannot be called in this context"))
        .otherwise(|subject| {
            let r = subject.try_get_value::<i32>().copied().unwrap_or_default();
            assert_eq!(r, value);
            r * 2
        });

    assert_eq!(result, value * 2);
}

#[test]
fn test_any_failure_case() {
    let response = WhateverService::get_validation();

    let message = response
        .switch()
        .case::<MyError>(|_| panic!("error cannot be called in this context"))
        .case::<dyn Failure>(|failure| failure.to_string())
        .default(|_| String::new());

    assert_eq!(message, VALIDATION_MESSAGE);
}

#[test]
fn test_handler_errors_pass_through() {
    let response = WhateverService::get_validation();

    let result: anyhow::Result<usize> = response
        .switch()
        .case::<Success<String>>(|Success(s)| Ok(s.len()))
        .case::<MyValidation>(|validation| anyhow::bail!("rejected: {}", validation.reason))
        .default(|_| Ok(0));

    let err = result.expect_err("handler error is returned as is");
    assert_eq!(err.to_string(), format!("rejected: {}", VALIDATION_MESSAGE));
}

#[test]
fn test_end_to_end() {
    #[derive(Debug, Failure)]
    struct TimeoutFailure {
        message: String,
    }

    #[derive(Debug, Failure)]
    struct ValidationFailure {
        message: String,
    }

    let upper = Outcome::success(String::from("hi"))
        .switch()
        .case::<Success<String>>(|s| s.to_uppercase())
        .default(|_| "?".to_string());
    assert_eq!(upper, "HI");

    let outcome: Outcome<String> = TimeoutFailure {
        message: "t".into(),
    }
    .into();
    let message = outcome
        .switch()
        .case::<ValidationFailure>(|_| "validation".to_string())
        .default(|subject| {
            subject
                .failure()
                .map(|f| f.message().to_string())
                .unwrap_or_default()
        });
    assert_eq!(message, "t");
}

#[test]
fn test_absent_values_are_rejected() {
    let err = Outcome::<String>::from_failure(None).expect_err("absent failure");
    assert_eq!(err, Error::InvalidArgument { name: "failure" });

    assert!(Switch::<String, ()>::try_new(None).is_err());
    assert!(Switch::<String, i32>::try_new(None).is_err());
}
