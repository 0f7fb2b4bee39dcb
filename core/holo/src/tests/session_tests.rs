//! ConversationSession のフォールバック連鎖テスト

use std::sync::Arc;

use common::adapter::{NoopLog, StdClock};
use common::llm::driver::LlmDriver;
use common::llm::provider::Role;

use crate::adapter::StubProvider;
use crate::domain::canned::{THANKS_REPLY, UNKNOWN_REPLY};
use crate::domain::LocalResponder;
use crate::usecase::ConversationSession;

fn responder() -> LocalResponder {
    LocalResponder::new(Arc::new(StdClock))
}

fn session_with(
    primary: StubProvider,
    fallback: Option<StubProvider>,
) -> ConversationSession<StubProvider> {
    ConversationSession::new(
        "persona",
        10,
        LlmDriver::new(primary),
        fallback.map(LlmDriver::new),
        responder(),
        Arc::new(NoopLog),
    )
}

#[test]
fn test_primary_success_appends_assistant_reply() {
    let primary = StubProvider::reply("primary", "All systems nominal.");
    let mut session = session_with(primary, None);

    let reply = session.request_reply("status report");
    assert_eq!(reply, "All systems nominal.");

    let messages = session.transcript().messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0].role, Role::System);
    assert_eq!(messages[1].role, Role::User);
    assert_eq!(messages[1].content, "status report");
    assert_eq!(messages[2].role, Role::Assistant);
    assert_eq!(messages[2].content, "All systems nominal.");
}

#[test]
fn test_primary_http_500_falls_back_to_second_model() {
    let primary = StubProvider::http_error("primary", 500);
    let fallback = StubProvider::reply("fallback", "Hi");
    let primary_calls = primary.call_log();
    let fallback_calls = fallback.call_log();
    let mut session = session_with(primary, Some(fallback));

    let reply = session.request_reply("hello there");
    assert_eq!(reply, "Hi");

    // フォールバックは 1 回だけ、primary と同一の履歴で呼ばれる
    assert_eq!(primary_calls.lock().unwrap().len(), 1);
    assert_eq!(fallback_calls.lock().unwrap().len(), 1);
    assert_eq!(
        primary_calls.lock().unwrap()[0],
        fallback_calls.lock().unwrap()[0]
    );

    let last = session.transcript().messages().last().unwrap().clone();
    assert_eq!(last.role, Role::Assistant);
    assert_eq!(last.content, "Hi");
}

#[test]
fn test_both_providers_fail_serves_thanks_literal() {
    let primary = StubProvider::http_error("primary", 500);
    let fallback = StubProvider::transport_error("fallback", "connection refused");
    let mut session = session_with(primary, Some(fallback));

    let reply = session.request_reply("Thank you!");
    assert_eq!(reply, THANKS_REPLY);
}

#[test]
fn test_local_reply_is_not_appended_to_history() {
    let primary = StubProvider::transport_error("primary", "dns failure");
    let mut session = session_with(primary, None);
    let before = session.transcript().len();

    let reply = session.request_reply("something obscure zzz");
    assert!(!reply.is_empty());

    // user メッセージは積まれるが assistant 側は積まれない
    assert_eq!(session.transcript().len(), before + 1);
    assert_eq!(
        session.transcript().messages().last().unwrap().role,
        Role::User
    );
}

#[test]
fn test_no_distinct_fallback_goes_straight_to_local() {
    let primary = StubProvider::http_error("primary", 503);
    let calls = primary.call_log();
    let mut session = session_with(primary, None);
    assert!(!session.has_fallback());

    let reply = session.request_reply("qwerty zxcvb");
    assert_eq!(reply, UNKNOWN_REPLY);
    // リモート試行は 1 回だけ
    assert_eq!(calls.lock().unwrap().len(), 1);
}

#[test]
fn test_reply_is_nonempty_in_all_three_scenarios() {
    let mut ok = session_with(StubProvider::reply("primary", "fine"), None);
    assert!(!ok.request_reply("ping").is_empty());

    let mut via_fallback = session_with(
        StubProvider::http_error("primary", 500),
        Some(StubProvider::reply("fallback", "still fine")),
    );
    assert!(!via_fallback.request_reply("ping").is_empty());

    let mut all_remote_down = session_with(
        StubProvider::http_error("primary", 500),
        Some(StubProvider::http_error("fallback", 502)),
    );
    assert!(!all_remote_down.request_reply("ping").is_empty());
}

#[test]
fn test_transport_and_provider_faults_are_treated_alike() {
    let mut provider_fault = session_with(StubProvider::http_error("primary", 500), None);
    let mut transport_fault =
        session_with(StubProvider::transport_error("primary", "timed out"), None);
    assert_eq!(
        provider_fault.request_reply("qwerty zxcvb"),
        transport_fault.request_reply("qwerty zxcvb")
    );
}

#[test]
fn test_reset_history_keeps_persona_only() {
    let mut session = session_with(StubProvider::reply("primary", "ok"), None);
    let _ = session.request_reply("one");
    assert!(session.transcript().len() > 1);

    session.reset_history();
    assert_eq!(session.transcript().len(), 1);
    assert_eq!(session.transcript().messages()[0].role, Role::System);
    assert_eq!(session.transcript().messages()[0].content, "persona");
}

#[test]
fn test_append_message_enforces_bound() {
    let mut session = ConversationSession::new(
        "persona",
        3,
        LlmDriver::new(StubProvider::reply("primary", "ok")),
        None,
        responder(),
        Arc::new(NoopLog),
    );
    for i in 0..10 {
        session.append_message(Role::User, format!("m{}", i));
        assert!(session.transcript().len() <= 3 + 1);
    }
    assert_eq!(session.transcript().messages()[0].role, Role::System);
    assert_eq!(
        session.transcript().messages().last().unwrap().content,
        "m9"
    );
}
