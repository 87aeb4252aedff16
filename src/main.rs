//! Board Tally entry point
//!
//! Wires the page to the tracker on web; runs a scripted headless session natively.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod web_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, Event, EventTarget, HtmlInputElement, HtmlTextAreaElement, Node};

    use board_tally::audio::Beeper;
    use board_tally::platform::dom::ids;
    use board_tally::platform::{DomDisplay, IntervalScheduler, WebHost};
    use board_tally::tracker::CounterId;
    use board_tally::{Command, Settings, Tracker};

    /// App instance holding all state
    struct App {
        tracker: Tracker,
        host: WebHost,
        settings: Settings,
    }

    impl App {
        /// Run a command; a failed load comes back as alert text
        fn dispatch(&mut self, command: Command) -> Option<String> {
            let App { tracker, host, .. } = self;
            tracker.dispatch(command, host).err().map(|e| e.to_string())
        }

        fn tick(&mut self) {
            let App { tracker, host, .. } = self;
            tracker.tick(host);
        }
    }

    /// Dispatch outside of any alert so the borrow is released first
    fn dispatch(app: &Rc<RefCell<App>>, command: Command) {
        let failure = app.borrow_mut().dispatch(command);
        if let Some(message) = failure {
            alert(&message);
        }
    }

    fn alert(message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn input_value(document: &Document, id: &str) -> Option<String> {
        document
            .get_element_by_id(id)?
            .dyn_into::<HtmlInputElement>()
            .ok()
            .map(|input| input.value())
    }

    fn sound_label(muted: bool) -> &'static str {
        if muted { "Sound: off" } else { "Sound: on" }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Board Tally starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document - nothing to attach to");
            return;
        };

        let settings = Settings::load();
        if let Some(input) = document
            .get_element_by_id(ids::TIMER_DURATION)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            input.set_value(&settings.timer_duration_secs.to_string());
        }

        let mut tracker = Tracker::new(settings.timer_duration_secs);
        // Names typed into the markup are the initial labels
        for id in CounterId::all() {
            if let Some(name) = input_value(&document, &ids::counter_name(id)) {
                tracker.cards.rename(id, name);
            }
        }

        let mut beeper = Beeper::new();
        beeper.set_volume(settings.effective_volume());

        let app = Rc::new(RefCell::new(App {
            tracker,
            host: WebHost {
                display: DomDisplay::new(document.clone()),
                beeper,
                scheduler: IntervalScheduler::new(),
            },
            settings,
        }));

        {
            let app_tick = app.clone();
            let tick = Closure::<dyn FnMut()>::new(move || app_tick.borrow_mut().tick());
            app.borrow_mut().host.scheduler.set_callback(tick);
        }

        {
            let mut a = app.borrow_mut();
            let App { tracker, host, .. } = &mut *a;
            tracker.init(host);
        }

        setup_counters(&document, app.clone());
        setup_cards(&document, app.clone());
        setup_timer(&document, app.clone());
        setup_save_load(&document, app.clone());
        setup_settings_panel(&document, app);

        log::info!("Board Tally running!");
    }

    /// `+`/`-` buttons carry `data-counter` and `data-delta`
    fn setup_counters(document: &Document, app: Rc<RefCell<App>>) {
        let Ok(buttons) = document.query_selector_all("[data-counter][data-delta]") else {
            return;
        };
        for i in 0..buttons.length() {
            let Some(btn) = buttons.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let id = btn
                .get_attribute("data-counter")
                .and_then(|v| v.trim().parse::<u8>().ok());
            let delta = btn
                .get_attribute("data-delta")
                .and_then(|v| v.trim().parse::<i64>().ok());
            let (Some(id), Some(delta)) = (id, delta) else {
                log::warn!("Counter button with bad data attributes");
                continue;
            };
            let app = app.clone();
            listen(&btn, "click", move |_| {
                dispatch(&app, Command::Adjust { id, delta });
            });
        }
    }

    /// Color pickers inside each card and the name inputs in card headers
    fn setup_cards(document: &Document, app: Rc<RefCell<App>>) {
        if let Ok(pickers) = document.query_selector_all(".card input[type=color]") {
            for i in 0..pickers.length() {
                let Some(picker) = pickers
                    .item(i)
                    .and_then(|n| n.dyn_into::<HtmlInputElement>().ok())
                else {
                    continue;
                };
                let Some(id) = picker
                    .closest(".card")
                    .ok()
                    .flatten()
                    .and_then(|card| card.get_attribute("data-id"))
                    .and_then(|v| CounterId::parse(&v))
                else {
                    continue;
                };
                let app = app.clone();
                let source = picker.clone();
                listen(&picker, "input", move |_| {
                    dispatch(&app, Command::SetColor { id, hex: source.value() });
                });
            }
        }

        for id in CounterId::all() {
            let Some(input) = document
                .get_element_by_id(&ids::counter_name(id))
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            else {
                continue;
            };
            let app = app.clone();
            let source = input.clone();
            listen(&input, "input", move |_| {
                dispatch(&app, Command::Rename { id, name: source.value() });
            });
        }
    }

    fn setup_timer(document: &Document, app: Rc<RefCell<App>>) {
        if let Some(btn) = document.get_element_by_id(ids::TIMER_START) {
            let app = app.clone();
            listen(&btn, "click", move |_| {
                // Browsers only allow audio after a user gesture
                app.borrow().host.beeper.resume();
                dispatch(&app, Command::Start);
            });
        }

        if let Some(btn) = document.get_element_by_id(ids::TIMER_PAUSE) {
            let app = app.clone();
            listen(&btn, "click", move |_| dispatch(&app, Command::Pause));
        }

        if let Some(btn) = document.get_element_by_id(ids::TIMER_RESET) {
            let app = app.clone();
            listen(&btn, "click", move |_| dispatch(&app, Command::Reset));
        }

        if let Some(input) = document
            .get_element_by_id(ids::TIMER_DURATION)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            let source = input.clone();
            listen(&input, "input", move |_| {
                let text = source.value();
                dispatch(&app, Command::Configure(text));
                // Remember whatever the timer actually accepted
                let mut a = app.borrow_mut();
                let secs = a.tracker.timer.duration();
                a.settings.set_timer_duration(secs);
                a.settings.save();
            });
        }
    }

    fn setup_save_load(document: &Document, app: Rc<RefCell<App>>) {
        if let Some(btn) = document.get_element_by_id(ids::SAVE_BUTTON) {
            let app = app.clone();
            listen(&btn, "click", move |_| dispatch(&app, Command::Save));
        }

        let state_box = document
            .get_element_by_id(ids::STATE_BOX)
            .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok());
        if let (Some(btn), Some(state_box)) = (document.get_element_by_id(ids::LOAD_BUTTON), state_box) {
            listen(&btn, "click", move |_| {
                dispatch(&app, Command::Load(state_box.value()));
            });
        }
    }

    /// Panel opens on its toggle and closes on any click outside it
    fn setup_settings_panel(document: &Document, app: Rc<RefCell<App>>) {
        let (Some(toggle), Some(panel)) = (
            document.get_element_by_id(ids::SETTINGS_TOGGLE),
            document.get_element_by_id(ids::SETTINGS_PANEL),
        ) else {
            return;
        };

        {
            let panel = panel.clone();
            listen(&toggle, "click", move |event| {
                event.stop_propagation();
                let _ = panel.class_list().toggle("active");
            });
        }

        {
            let toggle = toggle.clone();
            let panel = panel.clone();
            listen(document, "click", move |event| {
                let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                let target = target.as_ref();
                if !panel.contains(target) && !toggle.contains(target) {
                    let _ = panel.class_list().remove_1("active");
                }
            });
        }

        if let Some(btn) = document.get_element_by_id(ids::SOUND_TOGGLE) {
            btn.set_text_content(Some(sound_label(app.borrow().settings.muted)));
            let source = btn.clone();
            listen(&btn, "click", move |_| {
                let mut a = app.borrow_mut();
                let muted = a.settings.toggle_muted();
                let volume = a.settings.effective_volume();
                a.host.beeper.set_volume(volume);
                a.settings.save();
                source.set_text_content(Some(sound_label(muted)));
                log::info!("Sound {}", if muted { "muted" } else { "unmuted" });
            });
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    web_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Board Tally (native) starting...");
    log::info!("The table UI needs a browser - run with `trunk serve`; running a headless session");

    let duration = std::env::args().nth(1).unwrap_or_else(|| "20".to_string());
    headless::run(&duration);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted session against a host that logs instead of rendering
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use board_tally::tracker::{
        BeepCount, BeepSink, ColorZone, Controls, CounterId, DisplaySink, Scheduler, TaskId,
    };
    use board_tally::{Command, Tracker};

    #[derive(Default)]
    struct LogHost {
        next_task: i32,
        snapshot: Option<String>,
    }

    impl DisplaySink for LogHost {
        fn set_counter_text(&mut self, id: CounterId, value: i64) {
            log::info!("counter {id} = {value}");
        }

        fn pulse_counter(&mut self, _id: CounterId) {}

        fn set_timer_text(&mut self, text: &str) {
            log::info!("timer {text}");
        }

        fn set_timer_zone(&mut self, zone: ColorZone) {
            log::debug!("zone {zone:?}");
        }

        fn set_controls_enabled(&mut self, controls: Controls) {
            log::debug!("controls {controls:?}");
        }

        fn set_card_color(&mut self, id: CounterId, css: &str) {
            log::info!("card {id} color {css}");
        }

        fn set_card_name(&mut self, id: CounterId, name: &str) {
            log::info!("card {id} name {name:?}");
        }

        fn show_snapshot(&mut self, text: &str) {
            self.snapshot = Some(text.to_string());
        }
    }

    impl BeepSink for LogHost {
        fn play_beeps(&mut self, count: BeepCount) {
            log::info!("{}", "beep ".repeat(count.count() as usize).trim_end());
        }
    }

    impl Scheduler for LogHost {
        fn start_repeating(&mut self, interval_ms: u32) -> TaskId {
            self.next_task += 1;
            log::debug!("task {} every {interval_ms}ms", self.next_task);
            TaskId(self.next_task)
        }

        fn cancel(&mut self, task: TaskId) {
            log::debug!("task {} cancelled", task.0);
        }
    }

    pub fn run(duration: &str) {
        let mut tracker = Tracker::default();
        let mut host = LogHost::default();
        tracker.init(&mut host);

        let mut setup = vec![
            Command::Adjust { id: 1, delta: 3 },
            Command::Adjust { id: 2, delta: -1 },
        ];
        setup.extend(CounterId::all().next().map(|id| Command::SetColor {
            id,
            hex: "#e63946".to_string(),
        }));
        setup.push(Command::Configure(duration.to_string()));
        setup.push(Command::Start);

        for command in setup {
            if let Err(e) = tracker.dispatch(command, &mut host) {
                log::error!("{e}");
            }
        }

        // Ticks arrive back to back instead of once per second
        while tracker.timer.is_running() {
            tracker.tick(&mut host);
        }

        if let Err(e) = tracker.dispatch(Command::Save, &mut host) {
            log::error!("{e}");
        }
        let Some(snapshot) = host.snapshot.take() else {
            return;
        };
        println!("{snapshot}");

        let mut restored = Tracker::default();
        match restored.dispatch(Command::Load(snapshot), &mut host) {
            Ok(()) if restored.counters == tracker.counters && restored.cards == tracker.cards => {
                println!("✓ Snapshot round-trip matches");
            }
            Ok(()) => log::error!("Snapshot round-trip mismatch"),
            Err(e) => log::error!("{e}"),
        }
    }
}
