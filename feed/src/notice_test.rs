use super::*;

fn alice() -> User {
    User {
        id: "1".to_owned(),
        email: "a@x.com".to_owned(),
    }
}

#[test]
fn login_success_welcomes_user() {
    let notice = login(&Ok(alice()));
    assert_eq!(notice.title, "Login successful");
    assert_eq!(notice.description.as_deref(), Some("Welcome back, a@x.com!"));
    assert!(!notice.is_error());
}

#[test]
fn login_rejection_does_not_reveal_which_part_failed() {
    let notice = login(&Err(SessionError::InvalidCredentials));
    assert_eq!(notice.to_string(), "Login failed: Invalid credentials");
    assert!(notice.is_error());
}

#[test]
fn login_transport_failure_has_its_own_text() {
    let notice = login(&Err(SessionError::Api(ApiError::Unreachable("x".to_owned()))));
    assert_eq!(notice.to_string(), "Error: Failed to login");
}

#[test]
fn signup_success_prompts_login() {
    let account = CreatedAccount {
        email: "a@x.com".to_owned(),
        ..CreatedAccount::default()
    };
    assert_eq!(
        signup(&Ok(account)).description.as_deref(),
        Some("Account created for a@x.com. Please login.")
    );
}

#[test]
fn signup_rejection_and_unreachable_differ() {
    let rejected = signup(&Err(SessionError::Api(ApiError::Rejected { status: 500 })));
    let unreachable = signup(&Err(SessionError::Api(ApiError::Unreachable("x".to_owned()))));
    assert_eq!(rejected.title, "Signup failed");
    assert_eq!(unreachable.title, "Error");
}

#[test]
fn signup_undecodable_success_reads_like_login() {
    let notice = signup(&Err(SessionError::Api(ApiError::Decode("eof".to_owned()))));
    assert_eq!(notice.to_string(), "Error: Failed to create account");
    let notice = login(&Err(SessionError::Api(ApiError::Decode("eof".to_owned()))));
    assert_eq!(notice.to_string(), "Error: Failed to login");
}

#[test]
fn disabled_api_is_signalled_everywhere() {
    let disabled = api_disabled();
    assert_eq!(login(&Err(SessionError::Api(ApiError::Disabled))), disabled);
    assert_eq!(post(&Err(FeedError::Api(ApiError::Disabled))), disabled);
    assert_eq!(delete(&Err(FeedError::Api(ApiError::Disabled))), disabled);
}

#[test]
fn empty_post_is_surfaced() {
    let notice = post(&Err(FeedError::EmptyContent));
    assert!(notice.is_error());
    assert_eq!(notice.title, "Failed to post comment");
}

#[test]
fn delete_without_email_is_surfaced() {
    assert_eq!(
        delete(&Err(FeedError::MissingUserEmail)).to_string(),
        "Failed to delete comment: No logged-in user email"
    );
}

#[test]
fn logout_has_title_only() {
    assert_eq!(logout().to_string(), "Logged out successfully");
}
