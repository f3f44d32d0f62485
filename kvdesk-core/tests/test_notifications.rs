mod support;

use std::rc::Rc;
use std::time::Duration;

use kvdesk_core::{messages, Dispatcher};
use support::{console, tracing_init, ManualHost, TestApi};

#[tokio::test]
async fn test_message_clears_when_expiry_fires() {
    tracing_init();
    let api = Rc::new(TestApi::seeded());
    let (dispatcher, host) = console(api);

    dispatcher.load_genres().await;
    let (ticket, after) = host.pending_expiry().unwrap();
    assert_eq!(after, Duration::from_secs(3));
    assert_eq!(host.read(|s| s.notification.current_ticket()), Some(ticket));

    host.fire_expiry();
    assert_eq!(host.message(), None);
}

#[tokio::test]
async fn test_newer_message_restarts_timer() {
    tracing_init();
    let api = Rc::new(TestApi::seeded());
    let (dispatcher, host) = console(api);

    dispatcher.notify("first");
    let (first, _) = host.pending_expiry().unwrap();
    dispatcher.notify("second");
    let (second, _) = host.pending_expiry().unwrap();

    assert_ne!(first, second);
    assert_eq!(host.message().as_deref(), Some("second"));

    // Only the latest timer remains; firing it clears the latest message
    host.fire_expiry();
    assert_eq!(host.message(), None);
    assert!(host.pending_expiry().is_none());
}

#[tokio::test]
async fn test_dismiss_clears_immediately() {
    tracing_init();
    let api = Rc::new(TestApi::seeded());
    let (dispatcher, host) = console(api);

    dispatcher.load_wallet().await;
    assert_eq!(host.message().as_deref(), Some(messages::WALLET_LOADED));
    dispatcher.dismiss_notification();
    assert_eq!(host.message(), None);

    // The timer firing afterwards is harmless
    host.fire_expiry();
    assert_eq!(host.message(), None);
}

#[tokio::test]
async fn test_configured_ttl_is_used() {
    tracing_init();
    let host = ManualHost::default();
    let dispatcher = Dispatcher::new(Rc::new(TestApi::seeded()), host.clone())
        .with_notification_ttl(Duration::from_millis(250));

    dispatcher.notify("hello");
    assert_eq!(
        host.pending_expiry().map(|(_, after)| after),
        Some(Duration::from_millis(250))
    );
}
