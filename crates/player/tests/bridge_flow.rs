//! End-to-end bridge flow: host adapter, event bus and the built-in scenes.

use std::cell::RefCell;
use std::rc::Rc;

use gamebridge_domain::{SceneKey, WalletHandle, WalletIdentity, WalletStatus, ZoneId};
use gamebridge_player::game::scenes::ZONE_ENTERED;
use gamebridge_player::game::{SceneGameFactory, SceneGameOptions};
use gamebridge_player::infrastructure::platform::Realm;
use gamebridge_player::ports::outbound::GameFactory;
use gamebridge_player::{EventBus, GameHostAdapter};
use gamebridge_shared::{BusChannel, BusPayload};

const WALLET_KEY: &str = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU";
const MAX_FRAMES: usize = 32;

fn wallet() -> WalletHandle {
    WalletHandle::new(
        WalletIdentity::new(WALLET_KEY, "https://api.devnet.solana.com").expect("identity"),
    )
}

fn host(bus: &EventBus) -> GameHostAdapter {
    let factory: GameFactory = Rc::new(SceneGameFactory::new(bus, SceneGameOptions::default()));
    let config = SceneGameFactory::standard_config().expect("config");
    GameHostAdapter::new(bus.clone(), factory, config)
}

fn step_until(adapter: &mut GameHostAdapter, done: impl Fn(&GameHostAdapter) -> bool) -> bool {
    for _ in 0..MAX_FRAMES {
        if done(adapter) {
            return true;
        }
        adapter.step();
    }
    done(adapter)
}

fn active_scene(adapter: &GameHostAdapter) -> Option<SceneKey> {
    adapter.status().and_then(|status| status.active_scene)
}

#[test]
fn mount_ready_wallet_reaches_world_map_in_selected_zone() {
    let bus = EventBus::new();
    let entered = Rc::new(RefCell::new(Vec::<ZoneId>::new()));
    {
        let entered = entered.clone();
        bus.on(
            ZONE_ENTERED,
            EventBus::handler(move |payload| {
                if let Some(zone) = payload.as_zone() {
                    entered.borrow_mut().push(zone.clone());
                }
            }),
        );
    }

    let mut adapter = host(&bus);
    adapter.render_pass();
    adapter
        .mount(ZoneId::new("heart").expect("zone"))
        .expect("mount");
    assert_eq!(active_scene(&adapter), Some(SceneKey::preloader()));

    // Wallet connected but game not ready yet: nothing is forwarded
    let handle = wallet();
    assert!(!adapter.sync_wallet(WalletStatus::Connected, Some(&handle)));

    assert!(step_until(&mut adapter, GameHostAdapter::is_ready));
    assert_eq!(active_scene(&adapter), Some(SceneKey::wallet_gate()));

    // Gate holds until the wallet arrives
    adapter.step();
    assert_eq!(active_scene(&adapter), Some(SceneKey::wallet_gate()));

    assert!(adapter.sync_wallet(WalletStatus::Connected, Some(&handle)));
    assert!(step_until(&mut adapter, |a| {
        active_scene(a) == Some(SceneKey::world_map())
    }));

    assert_eq!(
        entered.borrow().as_slice(),
        &[ZoneId::new("heart").expect("zone")]
    );
}

#[test]
fn umi_is_forwarded_once_per_handle() {
    let bus = EventBus::new();
    let umi_count = Rc::new(RefCell::new(0_usize));
    {
        let umi_count = umi_count.clone();
        bus.on(
            BusChannel::Umi,
            EventBus::handler(move |_| *umi_count.borrow_mut() += 1),
        );
    }

    let mut adapter = host(&bus);
    adapter.render_pass();
    adapter.mount(ZoneId::default()).expect("mount");
    assert!(step_until(&mut adapter, GameHostAdapter::is_ready));

    let handle = wallet();
    adapter.sync_wallet(WalletStatus::Connected, Some(&handle));
    adapter.sync_wallet(WalletStatus::Connected, Some(&handle));
    assert_eq!(*umi_count.borrow(), 1);

    // Reconnect yields a new session handle
    adapter.sync_wallet(WalletStatus::Connected, Some(&wallet()));
    assert_eq!(*umi_count.borrow(), 2);
}

#[test]
fn unmount_leaves_no_instance_and_silences_ready() {
    let bus = EventBus::new();
    let mut adapter = host(&bus);
    adapter.render_pass();
    adapter
        .mount(ZoneId::new("heart").expect("zone"))
        .expect("mount");
    assert!(adapter.live_instance().is_some());

    adapter.unmount();
    assert!(adapter.live_instance().is_none());
    assert!(adapter.status().is_none());

    // The ready listener is still registered but has no effect
    assert!(bus.listener_count(BusChannel::Ready) >= 1);
    bus.emit(BusChannel::Ready, BusPayload::Empty);
    assert!(!adapter.is_ready());
}

#[test]
fn zone_change_rebuilds_with_new_zone() {
    let bus = EventBus::new();
    let entered = Rc::new(RefCell::new(Vec::<String>::new()));
    {
        let entered = entered.clone();
        bus.on(
            ZONE_ENTERED,
            EventBus::handler(move |payload| {
                if let Some(zone) = payload.as_zone() {
                    entered.borrow_mut().push(zone.to_string());
                }
            }),
        );
    }

    let mut adapter = host(&bus);
    adapter.render_pass();
    let first = adapter
        .set_zone(ZoneId::new("heart").expect("zone"))
        .expect("mount")
        .expect("fresh instance");
    let second = adapter
        .set_zone(ZoneId::new("ember").expect("zone"))
        .expect("rebuild")
        .expect("fresh instance");
    assert_ne!(first, second);
    assert!(!adapter.is_ready());

    assert!(step_until(&mut adapter, GameHostAdapter::is_ready));
    adapter.sync_wallet(WalletStatus::Connected, Some(&wallet()));
    assert!(step_until(&mut adapter, |a| {
        active_scene(a) == Some(SceneKey::world_map())
    }));

    assert_eq!(entered.borrow().as_slice(), &["ember".to_string()]);
}

#[test]
fn headless_realm_never_readies() {
    let bus = EventBus::for_realm(Realm::Headless);
    assert!(!bus.is_active());

    let mut adapter = host(&bus);
    adapter.render_pass();
    adapter.mount(ZoneId::default()).expect("mount");

    for _ in 0..MAX_FRAMES {
        adapter.step();
    }
    assert!(!adapter.is_ready());
    assert!(!adapter.sync_wallet(WalletStatus::Connected, Some(&wallet())));
    assert_eq!(active_scene(&adapter), Some(SceneKey::wallet_gate()));

    adapter.unmount();
    assert!(adapter.live_instance().is_none());
}
