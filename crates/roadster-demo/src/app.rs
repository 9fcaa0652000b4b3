use std::time::Duration;

use roadster_engine::core::{App, AppControl, FrameCtx};
use roadster_engine::input::{InputFrame, InputState, Key};
use roadster_engine::paint::Color;
use roadster_engine::render::axes::AxesRenderer;
use roadster_engine::render::boxes::BoxRenderer;
use roadster_engine::render::SceneGlobals;
use roadster_engine::scene::{BoxCmd, DrawList};
use roadster_engine::time::TickAccumulator;

use roadster_sim::{scene_parts, step, ChaseCamera, Controls, TickConfig, VehicleState};

/// Key bindings: WASD drive, F toggles the doors, the vertical arrows lift
/// and drop the car, Escape quits.
const KEY_FORWARD: Key = Key::W;
const KEY_REVERSE: Key = Key::S;
const KEY_LEFT: Key = Key::A;
const KEY_RIGHT: Key = Key::D;
const KEY_DOOR: Key = Key::F;
const KEY_UP: Key = Key::ArrowUp;
const KEY_DOWN: Key = Key::ArrowDown;

pub struct DemoApp {
    vehicle: VehicleState,
    tick_config: TickConfig,
    camera: ChaseCamera,
    ticks: TickAccumulator,

    draw_list: DrawList,
    boxes: BoxRenderer,
    axes: AxesRenderer,
}

impl DemoApp {
    pub fn new() -> Self {
        Self {
            vehicle: VehicleState::default(),
            tick_config: TickConfig::default(),
            camera: ChaseCamera::default(),
            ticks: TickAccumulator::default(),
            draw_list: DrawList::new(),
            boxes: BoxRenderer::new(),
            axes: AxesRenderer::new(),
        }
    }

    fn simulate(&mut self, input: &InputState, input_frame: &InputFrame, dt: Duration) {
        let mut controls = Controls {
            forward: input.key_down(KEY_FORWARD),
            reverse: input.key_down(KEY_REVERSE),
            left: input.key_down(KEY_LEFT),
            right: input.key_down(KEY_RIGHT),
            up: input.key_down(KEY_UP),
            down: input.key_down(KEY_DOWN),
            door_pressed: input_frame.pressed(KEY_DOOR),
            door_held: input.key_down(KEY_DOOR),
        };

        for _ in 0..self.ticks.advance(dt) {
            step(&mut self.vehicle, &controls, &self.tick_config);
            // The press edge belongs to this frame, not to every catch-up
            // tick in the batch.
            controls.door_pressed = false;
        }
    }

    fn record_scene(&mut self) {
        self.draw_list.clear();
        for part in scene_parts(&self.vehicle) {
            self.draw_list.push_box(BoxCmd {
                model: part.model,
                normal: part.normal,
                color: Color::from_rgb_array(part.color),
                lit: part.lit,
            });
        }
    }
}

impl App for DemoApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input_frame.pressed(Key::Escape) {
            return AppControl::Exit;
        }

        self.simulate(
            ctx.input,
            ctx.input_frame,
            Duration::from_secs_f32(ctx.time.dt),
        );
        self.record_scene();

        let globals = SceneGlobals {
            view: self.camera.view(&self.vehicle),
            proj: self.camera.projection(ctx.viewport().aspect()),
            ..SceneGlobals::default()
        };

        let (draw_list, boxes, axes) = (&self.draw_list, &mut self.boxes, &mut self.axes);
        ctx.render(Color::BLACK, |rctx, target| {
            boxes.render(rctx, target, draw_list, &globals);
            axes.render(rctx, target, &globals);
        })
    }
}
