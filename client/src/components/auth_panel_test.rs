use super::*;

#[test]
fn hidden_form_has_no_copy() {
    assert_eq!(form_copy(AuthForm::Hidden), None);
}

#[test]
fn login_and_signup_forms_use_distinct_input_ids() {
    let login = form_copy(AuthForm::Login).unwrap();
    let signup = form_copy(AuthForm::Signup).unwrap();
    assert_ne!(login.id_prefix, signup.id_prefix);
}

#[test]
fn submit_labels_describe_pending_action() {
    let login = form_copy(AuthForm::Login).unwrap();
    assert_eq!((login.submit, login.submitting), ("Log In", "Logging in..."));
    let signup = form_copy(AuthForm::Signup).unwrap();
    assert_eq!((signup.submit, signup.submitting), ("Sign Up", "Creating account..."));
}
