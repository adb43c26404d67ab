use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::config::ApiConfig;
use crate::http::Method;
use crate::mock::{COMMENTS_JSON, MockTransport};
use crate::types::User;

type Feed = CommentFeed<MockTransport, Rc<RefCell<FeedState>>>;

fn feed_with(transport: MockTransport, store: Rc<RefCell<FeedState>>) -> Feed {
    let api = ApiClient::new(ApiConfig::new(Some("http://api.test"), None), transport);
    CommentFeed::new(api, store)
}

fn feed(transport: &MockTransport) -> Feed {
    feed_with(transport.clone(), Rc::new(RefCell::new(FeedState::default())))
}

fn session() -> Session {
    Session::authenticated(
        "t1".to_owned(),
        User {
            id: "1".to_owned(),
            email: "a@x.com".to_owned(),
        },
    )
    .unwrap()
}

fn comment(id: &str, email: &str) -> Comment {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "email": email,
        "content": "hi",
        "created_at": "2024-01-01T00:00:00Z",
    }))
    .unwrap()
}

// =============================================================
// refresh
// =============================================================

#[test]
fn refresh_replaces_cache_with_server_list() {
    let transport = MockTransport::new();
    transport.reply(200, COMMENTS_JSON);
    let feed = feed(&transport);
    feed.store().write(|s| s.comments = vec![comment("old", "z@x.com")]);

    assert_eq!(block_on(feed.refresh()), Ok(1));
    assert_eq!(feed.store().borrow().comments, vec![comment("c1", "a@x.com")]);
}

#[test]
fn refresh_failure_keeps_previous_cache() {
    let transport = MockTransport::new();
    transport.reply(503, "").fail("offline");
    let feed = feed(&transport);
    feed.store().write(|s| s.comments = vec![comment("old", "z@x.com")]);

    assert!(block_on(feed.refresh()).is_err());
    assert!(block_on(feed.refresh()).is_err());
    assert_eq!(feed.store().borrow().comments, vec![comment("old", "z@x.com")]);
}

#[test]
fn refresh_null_body_empties_cache() {
    let transport = MockTransport::new();
    transport.reply(200, "null");
    let feed = feed(&transport);
    feed.store().write(|s| s.comments = vec![comment("old", "z@x.com")]);

    assert_eq!(block_on(feed.refresh()), Ok(0));
    assert!(feed.store().borrow().comments.is_empty());
}

#[test]
fn refresh_non_array_body_empties_cache() {
    let transport = MockTransport::new();
    transport.reply(200, r#"{"error":"unexpected"}"#);
    let feed = feed(&transport);
    feed.store().write(|s| s.comments = vec![comment("old", "z@x.com")]);

    assert_eq!(block_on(feed.refresh()), Ok(0));
    assert!(feed.store().borrow().comments.is_empty());
}

#[test]
fn refresh_unparseable_body_keeps_cache() {
    let transport = MockTransport::new();
    transport.reply(200, "<html>");
    let feed = feed(&transport);
    feed.store().write(|s| s.comments = vec![comment("old", "z@x.com")]);

    assert!(matches!(block_on(feed.refresh()), Err(ApiError::Decode(_))));
    assert_eq!(feed.store().borrow().comments, vec![comment("old", "z@x.com")]);
}

// =============================================================
// post_comment
// =============================================================

#[test]
fn blank_post_never_hits_network() {
    let transport = MockTransport::new();
    let feed = feed(&transport);

    for content in ["", "   ", "\n\t"] {
        assert_eq!(
            block_on(feed.post_comment(content, &session())),
            Err(FeedError::EmptyContent)
        );
    }
    assert!(transport.requests().is_empty());
}

#[test]
fn anonymous_post_never_hits_network() {
    let transport = MockTransport::new();
    let feed = feed(&transport);
    assert_eq!(
        block_on(feed.post_comment("hello", &Session::anonymous())),
        Err(FeedError::NotAuthenticated)
    );
    assert!(transport.requests().is_empty());
}

#[test]
fn post_success_clears_draft_and_refreshes_once() {
    let transport = MockTransport::new();
    transport.reply(200, "").reply(200, COMMENTS_JSON);
    let feed = feed(&transport);
    feed.store().write(|s| s.draft = "hello".to_owned());

    block_on(feed.post_comment("hello", &session())).unwrap();

    let state = feed.store().borrow().clone();
    assert!(state.draft.is_empty());
    assert!(!state.posting);
    assert_eq!(state.comments, vec![comment("c1", "a@x.com")]);
    assert_eq!(transport.count(Method::Get, "/comments"), 1);
    assert_eq!(transport.requests()[0].authorization.as_deref(), Some("t1"));
}

#[test]
fn post_failure_keeps_draft() {
    let transport = MockTransport::new();
    transport.reply(401, "Unauthorized");
    let feed = feed(&transport);
    feed.store().write(|s| s.draft = "hello".to_owned());

    assert_eq!(
        block_on(feed.post_comment("hello", &session())),
        Err(FeedError::Api(ApiError::Rejected { status: 401 }))
    );
    let state = feed.store().borrow().clone();
    assert_eq!(state.draft, "hello");
    assert!(!state.posting);
    assert_eq!(transport.count(Method::Get, "/comments"), 0);
}

#[test]
fn post_succeeds_even_if_follow_up_refresh_fails() {
    let transport = MockTransport::new();
    transport.reply(200, "").fail("offline");
    let feed = feed(&transport);
    feed.store().write(|s| s.comments = vec![comment("old", "z@x.com")]);

    assert_eq!(block_on(feed.post_comment("hello", &session())), Ok(()));
    assert_eq!(feed.store().borrow().comments, vec![comment("old", "z@x.com")]);
}

// =============================================================
// delete_comment
// =============================================================

#[test]
fn delete_without_user_email_never_hits_network() {
    let transport = MockTransport::new();
    let feed = feed(&transport);
    assert_eq!(
        block_on(feed.delete_comment("c1", &Session::anonymous())),
        Err(FeedError::MissingUserEmail)
    );
    assert!(transport.requests().is_empty());
}

#[test]
fn delete_success_refreshes_once() {
    let transport = MockTransport::new();
    transport
        .reply(200, r#"{"message":"Comment deleted successfully"}"#)
        .reply(200, "null");
    let feed = feed(&transport);
    feed.store().write(|s| s.comments = vec![comment("c1", "a@x.com")]);

    block_on(feed.delete_comment("c1", &session())).unwrap();

    let state = feed.store().borrow().clone();
    assert!(state.comments.is_empty());
    assert!(state.deleting.is_empty());
    assert_eq!(transport.count(Method::Delete, "/comment"), 1);
    assert_eq!(transport.count(Method::Get, "/comments"), 1);
    assert_eq!(
        transport.requests()[0].body.as_deref(),
        Some(r#"{"id":"c1","email":"a@x.com"}"#)
    );
}

#[test]
fn delete_failure_clears_pending_flag() {
    let transport = MockTransport::new();
    transport.fail("offline");
    let feed = feed(&transport);

    assert_eq!(
        block_on(feed.delete_comment("c1", &session())),
        Err(FeedError::Api(ApiError::Unreachable("offline".to_owned())))
    );
    assert!(!feed.store().borrow().is_deleting("c1"));
}

#[test]
fn concurrent_deletes_track_their_own_ids() {
    let store = Rc::new(RefCell::new(FeedState::default()));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let transport = {
        let store = store.clone();
        let seen = seen.clone();
        MockTransport::new().interleaved().on_send(move |req| {
            if req.method == Method::Delete {
                seen.borrow_mut().push(store.borrow().deleting.clone());
            }
        })
    };
    transport
        .reply(200, "")
        .reply(500, "")
        .reply(200, COMMENTS_JSON);
    let feed = feed_with(transport.clone(), store.clone());
    let session = session();

    let (a, b) = block_on(async {
        futures::join!(
            feed.delete_comment("c1", &session),
            feed.delete_comment("c2", &session)
        )
    });
    assert_eq!(a, Ok(()));
    assert_eq!(b, Err(FeedError::Api(ApiError::Rejected { status: 500 })));

    let seen = seen.borrow();
    assert_eq!(seen[0].keys().collect::<Vec<_>>(), vec!["c1"]);
    assert_eq!(seen[1].keys().collect::<Vec<_>>(), vec!["c1", "c2"]);
    assert!(store.borrow().deleting.is_empty());
    assert_eq!(transport.count(Method::Get, "/comments"), 1);
}

#[test]
fn overlapping_deletes_of_one_id_stay_pending_until_both_settle() {
    let store = Rc::new(RefCell::new(FeedState::default()));
    let pending_at_refresh = Rc::new(RefCell::new(Vec::new()));
    let transport = {
        let store = store.clone();
        let pending_at_refresh = pending_at_refresh.clone();
        MockTransport::new().interleaved().on_send(move |req| {
            if req.method == Method::Get {
                pending_at_refresh
                    .borrow_mut()
                    .push(store.borrow().is_deleting("c1"));
            }
        })
    };
    transport
        .reply(404, "")
        .reply(200, "")
        .reply(200, COMMENTS_JSON);
    let feed = feed_with(transport.clone(), store.clone());
    let session = session();

    let (a, b) = block_on(async {
        futures::join!(
            feed.delete_comment("c1", &session),
            feed.delete_comment("c1", &session)
        )
    });
    assert_eq!(a, Err(FeedError::Api(ApiError::Rejected { status: 404 })));
    assert_eq!(b, Ok(()));

    // The first delete has settled by the time the second one refreshes.
    assert_eq!(*pending_at_refresh.borrow(), vec![true]);
    assert!(!store.borrow().is_deleting("c1"));
}

#[test]
fn pending_delete_of_one_comment_leaves_others_clear() {
    let mut state = FeedState::default();
    state.deleting.insert("c1".to_owned(), 1);
    assert!(state.is_deleting("c1"));
    assert!(!state.is_deleting("c2"));
}

#[test]
fn delete_is_offered_only_for_own_comments() {
    let session = session();
    assert!(can_delete(&comment("c1", "a@x.com"), &session));
    assert!(!can_delete(&comment("c2", "b@x.com"), &session));
    assert!(!can_delete(&comment("c1", "a@x.com"), &Session::anonymous()));
}
