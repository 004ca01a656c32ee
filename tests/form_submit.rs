//! The form engine wired to a slice transaction, the way a create/edit
//! screen uses it: validate, assemble values, run the create, observe the
//! slice.

use memberdesk::domain::{Member, MemberStatus};
use memberdesk::form::{required, Form};
use memberdesk::slice::RequestPhase;
use memberdesk::store::SliceHandle;
use memberdesk::transaction::{Lifetime, Transaction};
use serde_json::json;

fn new_member_form() -> Form {
    let mut form = Form::new();
    form.register("firstname", Some(required("First name")), json!(""));
    form.register("lastname", Some(required("Last name")), json!(""));
    form.register("email", Some(required("Email")), json!(""));
    form
}

#[tokio::test]
async fn invalid_form_never_reaches_the_transaction() {
    let mut form = new_member_form();
    form.set_value("firstname", json!("Grace"));
    // lastname and email left blank

    let err = form.submit().expect_err("blank required fields block submit");
    assert_eq!(err.errors.len(), 2);
    assert_eq!(
        err.errors.get("lastname").map(String::as_str),
        Some("Last name is required")
    );
    // Values are preserved for correction
    assert_eq!(form.value("firstname"), Some(&json!("Grace")));
}

#[tokio::test]
async fn valid_submission_feeds_the_create_transaction() {
    let handle: SliceHandle<Member> = SliceHandle::new();
    let txn = Transaction::new(handle.clone(), Lifetime::session());

    let mut form = new_member_form();
    form.set_value("firstname", json!("Grace"));
    form.set_value("lastname", json!("Hopper"));
    form.set_value("email", json!("grace@example.test"));

    let values = form.submit().expect("all fields valid");

    // The screen's submit handler: build the payload, run the create, and
    // let the server-assigned entity land in the slice.
    let created = Member {
        id: "m-new".to_string(),
        firstname: values["firstname"].as_str().unwrap().to_string(),
        lastname: values["lastname"].as_str().unwrap().to_string(),
        email: values["email"].as_str().unwrap().to_string(),
        expiration_time: None,
        status: MemberStatus::NonMember,
    };
    txn.create(|| async { Ok(created) }).await.unwrap();

    let state = handle.snapshot();
    assert_eq!(state.create.phase, RequestPhase::Success);
    let member = state.collection.get("m-new").expect("created member cached");
    assert_eq!(member.full_name(), "Grace Hopper");

    // The form does not reset itself; the screen decides when to close.
    assert_eq!(form.value("firstname"), Some(&json!("Grace")));
}

#[tokio::test]
async fn failed_create_leaves_form_and_slice_intact() {
    let handle: SliceHandle<Member> = SliceHandle::new();
    let txn = Transaction::new(handle.clone(), Lifetime::session());

    let mut form = new_member_form();
    form.set_value("firstname", json!("Grace"));
    form.set_value("lastname", json!("Hopper"));
    form.set_value("email", json!("taken@example.test"));
    let values = form.submit().expect("fields valid");

    txn.create(|| async {
        Err(memberdesk::api::ApiError::from_status(
            409,
            "email taken".to_string(),
        ))
    })
    .await
    .unwrap();

    let state = handle.snapshot();
    assert!(state.collection.is_empty());
    assert_eq!(
        state.create.error.as_deref(),
        Some("Already exists: email taken")
    );
    // Immediate resubmission is possible without data loss
    assert_eq!(values["email"], json!("taken@example.test"));
    assert_eq!(form.value("email"), Some(&json!("taken@example.test")));
}
