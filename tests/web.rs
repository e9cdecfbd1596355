#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use console_error_panic_hook::set_once as set_panic_hook;
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    Element, Event, EventInit, HtmlSelectElement, KeyboardEvent, KeyboardEventInit, MouseEvent,
    MouseEventInit,
};
use yew::Callback;

use wumpus_web::components::action_panel::{ActionPanel, ActionPanelProps};
use wumpus_web::components::board::{Board, BoardProps};
use wumpus_web::components::error_banner::{ErrorBanner, ErrorBannerProps};
use wumpus_web::components::percepts_panel::{PerceptsPanel, PerceptsPanelProps};
use wumpus_web::components::stats_panel::{StatsPanel, StatsPanelProps};
use wumpus_web::input::{attach_shortcuts, Action};
use wumpus_web::model::{Direction, GameState, Percepts, Tile};
use wumpus_web::render::{cells, PerceptView, StatusView};

wasm_bindgen_test_configure!(run_in_browser);

fn test_root(id: &str) -> Element {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .expect("document available");
    let root = document.create_element("div").expect("create test root");
    root.set_id(id);
    document
        .body()
        .expect("body available")
        .append_child(&root)
        .expect("append test root");
    root
}

fn text_of(root: &Element, selector: &str) -> String {
    root.query_selector(selector)
        .expect("valid selector")
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

fn scenario() -> GameState {
    let mut tiles = vec![vec![Tile::default(); 2]; 2];
    tiles[0][0] = Tile { discovered: true, agent: true, visited: true, safe: true, ..Tile::default() };
    tiles[1][1] = Tile { discovered: true, gold: true, wumpus: true, ..Tile::default() };
    tiles[1][0] = Tile { pit: true, ..Tile::default() };
    GameState {
        size: 2,
        tiles,
        status: "Playing".into(),
        score: 0,
        arrow_available: true,
        wumpus_alive: true,
        percepts: Percepts::default(),
        game_over: false,
        has_gold: false,
        scream_heard: false,
        agent: Some((0, 0)),
    }
}

#[wasm_bindgen_test(async)]
async fn board_renders_one_cell_per_tile() {
    set_panic_hook();
    let st = scenario();
    let root = test_root("board-root");
    let props = BoardProps { size: st.size, cells: cells(&st) };
    let _handle = yew::Renderer::<Board>::with_root_and_props(root.clone(), props).render();
    TimeoutFuture::new(10).await;

    let nodes = root.query_selector_all(".cell").expect("query cells");
    assert_eq!(nodes.length(), 4);
    let hints: Vec<String> = (0..4)
        .filter_map(|i| nodes.item(i))
        .map(|n| {
            let el: &Element = wasm_bindgen::JsCast::unchecked_ref(&n);
            text_of(el, ".hint")
        })
        .collect();
    assert_eq!(hints, vec!["0,0", "0,1", "1,0", "1,1"]);

    assert!(text_of(&root, "[data-row='0'][data-col='0']").starts_with("🤖"));
    assert!(text_of(&root, "[data-row='0'][data-col='1']").starts_with("❔"));
    // Undiscovered pit stays hidden; gold outranks the wumpus.
    assert!(text_of(&root, "[data-row='1'][data-col='0']").starts_with("❔"));
    assert!(text_of(&root, "[data-row='1'][data-col='1']").starts_with("💰"));

    let agent = root.query_selector(".cell.agent").expect("query").expect("agent cell");
    assert_eq!(agent.get_attribute("data-col").as_deref(), Some("0"));
    assert!(agent.class_list().contains("safe"));
    assert!(agent.class_list().contains("visited"));
}

#[wasm_bindgen_test(async)]
async fn panels_show_latest_indicators() {
    set_panic_hook();
    let mut st = scenario();
    st.status = "You hear a terrifying scream!".into();
    st.score = -11;
    st.arrow_available = false;
    st.wumpus_alive = false;
    st.percepts.scream = true;

    let root = test_root("stats-root");
    let _stats = yew::Renderer::<StatsPanel>::with_root_and_props(
        root.clone(),
        StatsPanelProps { view: StatusView::from_state(&st) },
    )
    .render();
    let percept_root = test_root("percepts-root");
    let _percepts = yew::Renderer::<PerceptsPanel>::with_root_and_props(
        percept_root.clone(),
        PerceptsPanelProps { view: PerceptView::from_state(&st) },
    )
    .render();
    TimeoutFuture::new(10).await;

    assert_eq!(text_of(&root, "#statusText"), "You hear a terrifying scream!");
    assert_eq!(text_of(&root, "#score"), "-11");
    assert_eq!(text_of(&root, "#arrow"), "No");
    assert_eq!(text_of(&root, "#wumpus"), "No");
    assert_eq!(text_of(&percept_root, "#breeze"), "No");
    assert_eq!(text_of(&percept_root, "#stench"), "No");
    assert_eq!(text_of(&percept_root, "#glitter"), "No");
    assert_eq!(text_of(&percept_root, "#scream"), "Yes");
}

#[wasm_bindgen_test(async)]
async fn error_banner_only_with_message() {
    set_panic_hook();
    let empty = test_root("banner-empty");
    let _a = yew::Renderer::<ErrorBanner>::with_root_and_props(
        empty.clone(),
        ErrorBannerProps { message: None, on_dismiss: Default::default() },
    )
    .render();
    let shown = test_root("banner-shown");
    let _b = yew::Renderer::<ErrorBanner>::with_root_and_props(
        shown.clone(),
        ErrorBannerProps {
            message: Some("/api/move: server answered 500".into()),
            on_dismiss: Default::default(),
        },
    )
    .render();
    TimeoutFuture::new(10).await;

    assert!(empty.query_selector("#errorBanner").expect("query").is_none());
    assert!(text_of(&shown, "#errorBanner").contains("/api/move: server answered 500"));
}

fn recorder<T: 'static>(log: &Rc<RefCell<Vec<String>>>, tag: &'static str) -> Callback<T>
where
    T: std::fmt::Debug,
{
    let log = log.clone();
    Callback::from(move |v: T| log.borrow_mut().push(format!("{} {:?}", tag, v)))
}

#[wasm_bindgen_test(async)]
async fn shoot_selector_change_records_and_dblclick_fires() {
    set_panic_hook();
    let log = Rc::new(RefCell::new(Vec::<String>::new()));
    let root = test_root("action-root");
    let props = ActionPanelProps {
        shoot_dir: Direction::Right,
        on_move: recorder(&log, "move"),
        on_grab: recorder(&log, "grab"),
        on_climb: recorder(&log, "climb"),
        on_select_dir: recorder(&log, "select"),
        on_shoot: recorder(&log, "shoot"),
    };
    let _handle = yew::Renderer::<ActionPanel>::with_root_and_props(root.clone(), props).render();
    TimeoutFuture::new(10).await;

    let select: HtmlSelectElement = root
        .query_selector("#shootDir")
        .expect("query")
        .expect("shoot selector")
        .dyn_into()
        .expect("select element");
    assert_eq!(select.value(), "right");

    select.set_value("left");
    let init = EventInit::new();
    init.set_bubbles(true);
    let change = Event::new_with_event_init_dict("change", &init).expect("change event");
    select.dispatch_event(&change).expect("dispatch change");
    TimeoutFuture::new(10).await;
    assert_eq!(*log.borrow(), vec!["select Left"]);

    let init = MouseEventInit::new();
    init.set_bubbles(true);
    let dbl = MouseEvent::new_with_mouse_event_init_dict("dblclick", &init).expect("dblclick event");
    select.dispatch_event(&dbl).expect("dispatch dblclick");
    TimeoutFuture::new(10).await;
    assert_eq!(*log.borrow(), vec!["select Left", "shoot Left"]);
}

fn keydown(key: &str, ctrl: bool) -> KeyboardEvent {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_ctrl_key(ctrl);
    KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("keydown event")
}

#[wasm_bindgen_test]
fn shortcut_key_is_claimed_once() {
    set_panic_hook();
    let target = test_root("keys-root");
    let fired = Rc::new(RefCell::new(Vec::<Action>::new()));
    let on_action = {
        let fired = fired.clone();
        Callback::from(move |a: Action| fired.borrow_mut().push(a))
    };
    let shoot_dir = Rc::new(RefCell::new(Direction::Up));
    let _listener = attach_shortcuts(&target, shoot_dir.clone(), on_action);

    let grab = keydown("g", false);
    let not_cancelled = target.dispatch_event(&grab).expect("dispatch g");
    assert!(!not_cancelled);
    assert!(grab.default_prevented());
    assert_eq!(*fired.borrow(), vec![Action::Grab]);

    *shoot_dir.borrow_mut() = Direction::Left;
    let shoot = keydown("S", false);
    target.dispatch_event(&shoot).expect("dispatch S");
    assert!(shoot.default_prevented());
    assert_eq!(fired.borrow().last(), Some(&Action::Shoot(Direction::Left)));
    assert_eq!(fired.borrow().len(), 2);
}

#[wasm_bindgen_test]
fn unclaimed_keys_keep_browser_default() {
    set_panic_hook();
    let target = test_root("keys-free-root");
    let fired = Rc::new(RefCell::new(Vec::<Action>::new()));
    let on_action = {
        let fired = fired.clone();
        Callback::from(move |a: Action| fired.borrow_mut().push(a))
    };
    let _listener = attach_shortcuts(&target, Rc::new(RefCell::new(Direction::Right)), on_action);

    let other = keydown("x", false);
    target.dispatch_event(&other).expect("dispatch x");
    assert!(!other.default_prevented());

    // Ctrl+G and friends belong to the browser.
    let combo = keydown("g", true);
    target.dispatch_event(&combo).expect("dispatch ctrl+g");
    assert!(!combo.default_prevented());
    assert!(fired.borrow().is_empty());
}
