use std::sync::{Arc, Mutex};
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use drill_core::model::Digit;
use drill_core::time::FIXED_TEST_SEED;
use drill_core::{FeedbackTimings, SoundCue};
use services::{AudioError, DrillLoopService, DrillSettings, SoundPlayer};

use crate::context::{UiApp, build_app_context};
use crate::views::DrillView;
use crate::views::drill::DrillTestHandles;
use crate::vm::DrillIntent;

/// Short enough to keep tests fast, long enough to observe the locked window.
pub const TEST_DELAY: Duration = Duration::from_millis(20);

#[derive(Default)]
pub struct RecordingPlayer {
    played: Mutex<Vec<SoundCue>>,
}

impl RecordingPlayer {
    pub fn played(&self) -> Vec<SoundCue> {
        self.played.lock().expect("lock").clone()
    }
}

impl SoundPlayer for RecordingPlayer {
    fn play(&self, cue: SoundCue) -> Result<(), AudioError> {
        self.played.lock().expect("lock").push(cue);
        Ok(())
    }
}

struct TestApp {
    drill_loop: Arc<DrillLoopService>,
}

impl UiApp for TestApp {
    fn drill_loop(&self) -> Arc<DrillLoopService> {
        Arc::clone(&self.drill_loop)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: DrillTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { DrillView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub player: Arc<RecordingPlayer>,
    pub handles: DrillTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drives the dom until pending timers have had time to fire.
    pub async fn settle(&mut self) {
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn press(&mut self, digit: Digit) {
        let dispatch = self.handles.dispatch();
        self.dom
            .in_runtime(|| dispatch.call(DrillIntent::Digit(digit)));
        drive_dom(&mut self.dom);
    }

    pub fn press_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press(Digit::from_char(ch).expect("digit text"));
        }
    }

    pub fn expected_answer(&self) -> String {
        let vm = self.handles.vm();
        self.dom
            .in_runtime(|| vm.peek().drill().problem().answer_text())
    }

    pub fn input_text(&self) -> String {
        let vm = self.handles.vm();
        self.dom.in_runtime(|| vm.peek().input_text().to_string())
    }

    pub fn score(&self) -> u32 {
        let vm = self.handles.vm();
        self.dom.in_runtime(|| vm.peek().score())
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness() -> ViewHarness {
    let player = Arc::new(RecordingPlayer::default());
    let settings = DrillSettings::default()
        .with_seed(Some(FIXED_TEST_SEED))
        .with_timings(FeedbackTimings::uniform(TEST_DELAY));
    let drill_loop = Arc::new(DrillLoopService::new(settings, player.clone()));
    let handles = DrillTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            app: Arc::new(TestApp { drill_loop }),
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        player,
        handles,
    }
}
