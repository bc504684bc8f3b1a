//! Brain Dash entry point
//!
//! Wires the game to the page: loads the GLB assets through the engine,
//! resolves the HUD elements, translates DOM events into intents and
//! drives the frame loop off requestAnimationFrame.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use thiserror::Error;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Document, Element, KeyboardEvent, MouseEvent, TouchEvent};

    use brain_dash::assets::{AnimationId, AssetError, AssetKind, LoadedAssets};
    use brain_dash::input::{SwipeTracker, key_intent};
    use brain_dash::scene::{ModelHandle, NodeId, SceneHandle};
    use brain_dash::sim::{GamePhase, GameState, Intent};
    use brain_dash::{BestScore, GameWorld, Settings};

    // The page exposes the rendering engine as a `window.engine` namespace:
    // scene graph, GLTF loader, animation mixers, camera, clock, renderer.
    // Models and nodes are numeric handles into engine-side registries.
    #[wasm_bindgen]
    extern "C" {
        /// Resolves to a numeric model handle once the GLB is parsed
        #[wasm_bindgen(js_namespace = engine, js_name = loadModel)]
        fn engine_load_model(path: &str) -> js_sys::Promise;
        #[wasm_bindgen(js_namespace = engine, js_name = clipCount)]
        fn engine_clip_count(model: u32) -> u32;
        #[wasm_bindgen(js_namespace = engine, js_name = instantiate)]
        fn engine_instantiate(model: u32) -> u32;
        #[wasm_bindgen(js_namespace = engine, js_name = instantiateUnder)]
        fn engine_instantiate_under(model: u32, parent: u32) -> u32;
        #[wasm_bindgen(js_namespace = engine, js_name = removeNode)]
        fn engine_remove_node(node: u32);
        #[wasm_bindgen(js_namespace = engine, js_name = setPosition)]
        fn engine_set_position(node: u32, x: f32, y: f32, z: f32);
        #[wasm_bindgen(js_namespace = engine, js_name = setScale)]
        fn engine_set_scale(node: u32, scale: f32);
        #[wasm_bindgen(js_namespace = engine, js_name = setVisible)]
        fn engine_set_visible(node: u32, visible: bool);
        #[wasm_bindgen(js_namespace = engine, js_name = setTint)]
        fn engine_set_tint(node: u32, css_color: &str);
        #[wasm_bindgen(js_namespace = engine, js_name = playClip)]
        fn engine_play_clip(node: u32, clip: u32);
        #[wasm_bindgen(js_namespace = engine, js_name = advanceMixer)]
        fn engine_advance_mixer(dt: f32);
        #[wasm_bindgen(js_namespace = engine, js_name = setCamera)]
        fn engine_set_camera(x: f32, y: f32, z: f32);
        /// Seconds since the previous call, from the engine clock
        #[wasm_bindgen(js_namespace = engine, js_name = deltaSeconds)]
        fn engine_delta_seconds() -> f32;
        #[wasm_bindgen(js_namespace = engine, js_name = render)]
        fn engine_render();
        #[wasm_bindgen(js_namespace = engine, js_name = setShadowMapSize)]
        fn engine_set_shadow_map_size(size: u32);
    }

    /// `SceneHandle` over the page's engine namespace
    struct WebScene;

    impl SceneHandle for WebScene {
        fn delta_seconds(&mut self) -> f32 {
            engine_delta_seconds()
        }

        fn instantiate(&mut self, model: ModelHandle, parent: Option<NodeId>) -> NodeId {
            let node = match parent {
                Some(parent) => engine_instantiate_under(model.0, parent.0),
                None => engine_instantiate(model.0),
            };
            NodeId(node)
        }

        fn remove(&mut self, node: NodeId) {
            engine_remove_node(node.0);
        }

        fn set_position(&mut self, node: NodeId, pos: glam::Vec3) {
            engine_set_position(node.0, pos.x, pos.y, pos.z);
        }

        fn set_scale(&mut self, node: NodeId, scale: f32) {
            engine_set_scale(node.0, scale);
        }

        fn set_visible(&mut self, node: NodeId, visible: bool) {
            engine_set_visible(node.0, visible);
        }

        fn set_tint(&mut self, node: NodeId, css_color: &str) {
            engine_set_tint(node.0, css_color);
        }

        fn play_clip(&mut self, node: NodeId, clip: usize) {
            engine_play_clip(node.0, clip as u32);
        }

        fn advance_animations(&mut self, dt: f32) {
            engine_advance_mixer(dt);
        }

        fn set_camera_position(&mut self, pos: glam::Vec3) {
            engine_set_camera(pos.x, pos.y, pos.z);
        }
    }

    /// Why startup could not hand control to the frame loop
    #[derive(Debug, Error)]
    pub enum StartupError {
        #[error("no window/document available")]
        NoDocument,
        #[error("required element #{0} is missing from the page")]
        MissingElement(&'static str),
        #[error(transparent)]
        Asset(#[from] AssetError),
    }

    /// DOM handles resolved once at startup; the required ones failing
    /// to resolve is a page configuration error, not a runtime state
    struct Hud {
        score_board: Element,
        start_menu: Element,
        /// Visible while running; clicking it pauses
        play_btn: Element,
        /// Visible while paused; clicking it resumes
        pause_btn: Element,
        fps_label: Option<Element>,
        best_label: Option<Element>,
    }

    impl Hud {
        fn resolve(document: &Document) -> Result<Self, StartupError> {
            let require = |id: &'static str| {
                document
                    .get_element_by_id(id)
                    .ok_or(StartupError::MissingElement(id))
            };
            Ok(Self {
                score_board: require("scoreBoard")?,
                start_menu: require("startingMenu")?,
                play_btn: require("play")?,
                pause_btn: require("pause")?,
                fps_label: document.get_element_by_id("fps"),
                best_label: document.get_element_by_id("best"),
            })
        }

        fn set_score(&self, score: u32) {
            self.score_board
                .set_text_content(Some(&format!("Score: {score}")));
        }

        fn set_best(&self, score: u32) {
            if let Some(label) = &self.best_label {
                label.set_text_content(Some(&format!("Best: {score}")));
            }
        }

        fn set_fps(&self, fps: u32) {
            if let Some(label) = &self.fps_label {
                label.set_text_content(Some(&format!("{fps} fps")));
            }
        }

        /// Mirror the phase into menu and button visibility
        fn apply_phase(&self, phase: GamePhase) {
            match phase {
                GamePhase::NotStarted => {
                    show(&self.start_menu);
                    hide(&self.score_board);
                    hide(&self.play_btn);
                    hide(&self.pause_btn);
                }
                GamePhase::Running => {
                    hide(&self.start_menu);
                    show(&self.score_board);
                    show(&self.play_btn);
                    hide(&self.pause_btn);
                }
                GamePhase::Paused => {
                    hide(&self.play_btn);
                    show(&self.pause_btn);
                }
            }
        }
    }

    fn show(el: &Element) {
        let _ = el.set_attribute("class", "");
    }

    fn hide(el: &Element) {
        let _ = el.set_attribute("class", "hidden");
    }

    /// Game instance holding all state
    struct Game {
        world: GameWorld<WebScene>,
        swipe: SwipeTracker,
        best: BestScore,
        settings: Settings,
        hud: Hud,
        // Track phase transitions for HUD flips and best-score saves
        last_phase: GamePhase,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn handle_intent(&mut self, intent: Intent) {
            self.world.handle_intent(intent);
        }

        /// One requestAnimationFrame callback
        fn frame(&mut self, time: f64) {
            self.world.update();
            engine_render();
            self.track_fps(time);
            self.sync_hud();
        }

        fn track_fps(&mut self, time: f64) {
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        fn sync_hud(&mut self) {
            let phase = self.world.phase();

            // Score and best refresh only during active play
            if phase == GamePhase::Running {
                self.hud.set_score(self.world.score());
                if self.best.observe(self.world.score(), js_sys::Date::now()) {
                    self.hud.set_best(self.best.score);
                }
            }

            if self.settings.show_fps {
                self.hud.set_fps(self.fps);
            }

            if phase != self.last_phase {
                self.hud.apply_phase(phase);
                // A pause is the natural moment to persist the best score
                if phase == GamePhase::Paused {
                    self.best.save();
                }
                self.last_phase = phase;
            }
        }
    }

    /// Load the three models through the engine, verifying the rig
    async fn load_assets() -> Result<LoadedAssets, AssetError> {
        let mut handles = [ModelHandle(0); 3];
        for (slot, kind) in AssetKind::ALL.into_iter().enumerate() {
            let path = kind.path();
            let resolved = JsFuture::from(engine_load_model(path))
                .await
                .map_err(|err| AssetError::Load {
                    path,
                    reason: format!("{err:?}"),
                })?;
            let handle = resolved.as_f64().ok_or_else(|| AssetError::Load {
                path,
                reason: "loader returned a non-numeric handle".into(),
            })? as u32;
            handles[slot] = ModelHandle(handle);
            log::info!("Loaded {path}");
        }

        let assets = LoadedAssets {
            character: handles[0],
            pickup: handles[1],
            track_segment: handles[2],
        };

        let clips = engine_clip_count(assets.character.0) as usize;
        if clips < AnimationId::CLIP_COUNT {
            return Err(AssetError::MissingClips { found: clips });
        }
        Ok(assets)
    }

    pub async fn run() -> Result<(), StartupError> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Brain Dash starting...");

        let window = web_sys::window().ok_or(StartupError::NoDocument)?;
        let document = window.document().ok_or(StartupError::NoDocument)?;

        let settings = Settings::load();
        engine_set_shadow_map_size(settings.shadows.map_size());

        let hud = Hud::resolve(&document)?;
        let assets = load_assets().await?;

        let seed = js_sys::Date::now() as u64;
        let world = GameWorld::new(GameState::new(seed), WebScene, assets);
        log::info!("Game initialized with seed: {seed}");

        let best = BestScore::load();
        hud.set_best(best.score);
        if let Some(fps) = &hud.fps_label {
            if !settings.show_fps {
                hide(fps);
            }
        }
        hud.apply_phase(GamePhase::NotStarted);

        let play_btn = hud.play_btn.clone();
        let pause_btn = hud.pause_btn.clone();
        let swipe = SwipeTracker::new(settings.swipe_dead_zone);

        let game = Rc::new(RefCell::new(Game {
            world,
            swipe,
            best,
            settings,
            hud,
            last_phase: GamePhase::NotStarted,
            frame_times: [0.0; 60],
            frame_index: 0,
            fps: 0,
        }));

        setup_input_handlers(&document, game.clone());
        setup_pause_buttons(&play_btn, &pause_btn, game.clone());
        setup_auto_pause(game.clone());

        request_animation_frame(game);

        log::info!("Brain Dash running!");
        Ok(())
    }

    fn setup_input_handlers(document: &Document, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Any click starts the game; once running this is a no-op
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().handle_intent(Intent::Start);
            });
            let _ = window
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard: space toggles pause, arrows dodge
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let paused = g.world.phase() == GamePhase::Paused;
                if let Some(intent) = key_intent(&event.code(), paused) {
                    g.handle_intent(intent);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch: remember where the finger landed...
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.changed_touches().get(0) {
                    game.borrow_mut().swipe.touch_start(touch.screen_x() as f32);
                }
            });
            let _ = document
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // ...and turn the release into a start or a swipe
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.changed_touches().get(0) {
                    let mut g = game.borrow_mut();
                    let started = g.world.phase() != GamePhase::NotStarted;
                    let intent = g.swipe.touch_end(touch.screen_x() as f32, started);
                    if let Some(intent) = intent {
                        g.handle_intent(intent);
                    }
                }
            });
            let _ = document
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_pause_buttons(play_btn: &Element, pause_btn: &Element, game: Rc<RefCell<Game>>) {
        // The visible-while-running button pauses
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.stop_propagation();
                game.borrow_mut().handle_intent(Intent::Pause(true));
            });
            let _ = play_btn
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // The visible-while-paused button resumes
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.stop_propagation();
                game.borrow_mut().handle_intent(Intent::Pause(false));
            });
            let _ = pause_btn
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Tab switch or minimize
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    let mut g = game.borrow_mut();
                    if g.world.phase() == GamePhase::Running {
                        log::info!("Auto-paused (tab hidden)");
                        g.handle_intent(Intent::Pause(true));
                    }
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                if g.world.phase() == GamePhase::Running {
                    log::info!("Auto-paused (window blur)");
                    g.handle_intent(Intent::Pause(true));
                }
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }

    /// Best-effort startup failure message in the start menu
    pub fn report_failure(err: &StartupError) {
        if let Some(menu) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("startingMenu"))
        {
            menu.set_text_content(Some(&format!("Failed to start: {err}")));
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(err) = wasm_game::run().await {
        log::error!("Startup failed: {err}");
        wasm_game::report_failure(&err);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brain_dash::GameWorld;
    use brain_dash::assets::LoadedAssets;
    use brain_dash::scene::NullScene;
    use brain_dash::sim::{GameState, Intent, LaneShift};

    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xB4A1);
    log::info!("Brain Dash (native) headless demo, seed {seed}");

    let state = GameState::new(seed);
    let mut world = GameWorld::new(state, NullScene::new(1.0 / 60.0), LoadedAssets::headless());
    world.handle_intent(Intent::Start);

    // Thirty simulated seconds with a fixed dodge pattern
    for frame in 0u32..(30 * 60) {
        match frame % 180 {
            0 => world.handle_intent(Intent::Move(LaneShift::Left)),
            60 => world.handle_intent(Intent::Move(LaneShift::Right)),
            120 => world.handle_intent(Intent::Move(LaneShift::Right)),
            _ => {}
        }
        world.update();
    }

    log::info!(
        "Demo finished: score {} over {:.0}s",
        world.score(),
        world.state().run_time
    );
    println!("Score after 30s: {}", world.score());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
