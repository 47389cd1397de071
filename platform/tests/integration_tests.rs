use std::cell::RefCell;
use std::rc::Rc;

use tollgate_nullables::{NullClock, NullRegistryStore, NullSessionStore};
use tollgate_platform::{Event, Notifier, NullNotifier, PlatformError, Tollgate};
use tollgate_registry::ContentRegistry;
use tollgate_settlement::{SettlementEngine, SettlementError};
use tollgate_types::{AccountId, PlatformParams, SessionStatus, Value};

fn admin() -> AccountId {
    AccountId::new("toll_admin")
}

fn creator() -> AccountId {
    AccountId::new("toll_creator")
}

fn reader() -> AccountId {
    AccountId::new("toll_reader")
}

fn make_platform(listing_fee: u128) -> Tollgate {
    Tollgate::with_notifier(
        admin(),
        PlatformParams { listing_fee },
        Box::new(NullNotifier),
    )
}

/// Collects emitted events for assertions.
struct RecordingNotifier(Rc<RefCell<Vec<Event>>>);

impl Notifier for RecordingNotifier {
    fn notify(&self, event: &Event) {
        self.0.borrow_mut().push(event.clone());
    }
}

#[test]
fn full_streaming_lifecycle() {
    let clock = NullClock::new(0);
    let mut platform = make_platform(500);

    // Registration with exact-change fee collection.
    let mut creator_purse = Value::new(800);
    let reg = platform
        .register_content(&creator(), 1000, &mut creator_purse)
        .unwrap();
    assert_eq!(reg.fee_paid, 500);
    assert_eq!(creator_purse.value(), 300);
    assert_eq!(platform.platform_fee_balance(), 500);

    // Start, then settle twice until the deposit drains.
    let mut reader_purse = Value::new(5000);
    let session = platform
        .start_session(&reader(), reg.content, &mut reader_purse, 2500, clock.now())
        .unwrap();
    assert_eq!(reader_purse.value(), 2500);
    assert_eq!(platform.session_deposit(session), Some(2500));

    clock.advance(12_000);
    let s = platform.checkpoint(&reader(), session, clock.now()).unwrap();
    assert_eq!((s.paid, s.remaining), (1200, 1300));
    assert_eq!(platform.session_status(session), Some(SessionStatus::Active));

    clock.advance(13_000);
    let s = platform.checkpoint(&reader(), session, clock.now()).unwrap();
    assert_eq!((s.paid, s.remaining), (1300, 0));
    assert_eq!(platform.session_status(session), Some(SessionStatus::Paused));

    // Paused sessions refuse checkpoints until topped up.
    clock.advance(1_000);
    let err = platform.checkpoint(&reader(), session, clock.now()).unwrap_err();
    assert!(matches!(
        err,
        PlatformError::Settlement(SettlementError::InactiveSession { .. })
    ));

    platform
        .top_up(&reader(), session, &mut reader_purse, 1000, clock.now())
        .unwrap();
    assert_eq!(platform.session_status(session), Some(SessionStatus::Active));

    clock.advance(10_000);
    let s = platform.checkpoint(&reader(), session, clock.now()).unwrap();
    assert_eq!(s.paid, 1000);

    let closure = platform.end_session(&reader(), session, clock.now()).unwrap();
    assert!(closure.refund.is_zero());
    assert_eq!(closure.total_spent, 3500);
    assert_eq!(platform.session_status(session), Some(SessionStatus::Ended));

    // Earnings and fees land where they should.
    assert_eq!(platform.vault_balance(reg.vault), Some(3500));
    let earnings = platform.withdraw_vault(&creator(), reg.vault, 0).unwrap();
    assert_eq!(earnings.value(), 3500);
    let fees = platform.withdraw_platform(&admin(), 0).unwrap();
    assert_eq!(fees.value(), 500);
    assert_eq!(platform.platform_fee_balance(), 0);
}

#[test]
fn notifications_follow_settlement_rules() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut platform = Tollgate::with_notifier(
        admin(),
        PlatformParams::no_listing_fee(),
        Box::new(RecordingNotifier(events.clone())),
    );
    let clock = NullClock::new(0);

    let mut purse = Value::new(10_000);
    let reg = platform
        .register_content(&creator(), 1000, &mut purse)
        .unwrap();
    let session = platform
        .start_session(&reader(), reg.content, &mut purse, 1000, clock.now())
        .unwrap();

    // A zero-elapsed checkpoint settles nothing and stays silent.
    platform.checkpoint(&reader(), session, clock.now()).unwrap();
    assert!(!events
        .borrow()
        .iter()
        .any(|e| matches!(e, Event::CheckpointSettled { .. })));

    // Draining the deposit emits a settlement event.
    clock.advance(10_000);
    platform.checkpoint(&reader(), session, clock.now()).unwrap();
    assert!(events
        .borrow()
        .iter()
        .any(|e| matches!(e, Event::CheckpointSettled { paid: 1000, .. })));

    // Ending with nothing left still announces the zero refund.
    let closure = platform.end_session(&reader(), session, clock.now()).unwrap();
    assert!(closure.refund.is_zero());
    assert!(events
        .borrow()
        .iter()
        .any(|e| matches!(e, Event::SessionEnded { refund: 0, .. })));

    // Fee-free registration emits no listing-fee event.
    assert!(!events
        .borrow()
        .iter()
        .any(|e| matches!(e, Event::ListingFeePaid { .. })));
    assert!(events
        .borrow()
        .iter()
        .any(|e| matches!(e, Event::VaultCreated { .. })));
}

#[test]
fn authorization_is_enforced_at_every_surface() {
    let clock = NullClock::new(0);
    let mut platform = make_platform(0);
    let stranger = AccountId::new("toll_stranger");

    let mut purse = Value::new(10_000);
    let reg = platform
        .register_content(&creator(), 1000, &mut purse)
        .unwrap();
    let session = platform
        .start_session(&reader(), reg.content, &mut purse, 1000, clock.now())
        .unwrap();

    assert!(platform.update_rate(reg.content, &stranger, 2000).is_err());
    assert!(platform
        .checkpoint(&stranger, session, clock.now())
        .is_err());
    assert!(platform
        .top_up(&stranger, session, &mut purse, 100, clock.now())
        .is_err());
    assert!(platform.end_session(&stranger, session, clock.now()).is_err());
    assert!(platform.withdraw_vault(&stranger, reg.vault, 0).is_err());
    assert!(platform.withdraw_platform(&stranger, 0).is_err());
}

#[test]
fn state_survives_a_store_round_trip() {
    let clock = NullClock::new(0);
    let mut platform = make_platform(500);

    let mut purse = Value::new(10_000);
    let reg = platform
        .register_content(&creator(), 1000, &mut purse)
        .unwrap();
    let session = platform
        .start_session(&reader(), reg.content, &mut purse, 2500, clock.now())
        .unwrap();
    clock.advance(12_000);
    platform.checkpoint(&reader(), session, clock.now()).unwrap();

    let session_store = NullSessionStore::new();
    let registry_store = NullRegistryStore::new();
    platform.engine.save_to_store(&session_store).unwrap();
    platform.registry.save_to_store(&registry_store).unwrap();

    let engine = SettlementEngine::load_from_store(&session_store).unwrap();
    let registry = ContentRegistry::load_from_store(&registry_store).unwrap();

    let restored = engine.session(session).unwrap();
    assert_eq!(restored.deposit.value(), 1300);
    assert_eq!(restored.total_spent, 1200);
    assert_eq!(restored.status, SessionStatus::Active);
    assert_eq!(restored.last_checkpoint, clock.now());

    assert_eq!(registry.binding(reg.content).unwrap().rate, 1000);
    assert_eq!(registry.vault(reg.vault).unwrap().balance.value(), 1200);
    assert_eq!(registry.treasury.balance.value(), 500);
}
