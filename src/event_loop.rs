use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, KeyboardInput, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};
use pixels::{Pixels, SurfaceTexture};
use std::time::Instant;

use anyhow::Context;
use log::{debug, error};

use crate::frame::{FRAME_SIZE, FrameCanvas};
use crate::game::{GameState, TickOutcome};
use crate::game_input::Command;
use crate::render::render;
use crate::settings::Settings;
use crate::timer::Ticker;

/// Opens the window and runs the game until it is closed.
/// Ticks, key presses and redraws are all handled on this one thread.
pub fn run(settings: Settings) -> anyhow::Result<()> {
    let event_loop = EventLoop::new();

    let window = WindowBuilder::new()
        .with_title(settings.window_title.as_str())
        .with_inner_size(LogicalSize::new(settings.window_size, settings.window_size))
        .with_resizable(false)
        .build(&event_loop)
        .context("could not create window")?;

    let mut pixels = {
        let window_size = window.inner_size();
        let surface = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(FRAME_SIZE, FRAME_SIZE, surface).context("could not create pixel surface")?
    };

    let mut game = match settings.seed {
        Some(seed) => GameState::with_seed(settings.difficulty, seed),
        None => GameState::new(settings.difficulty),
    };
    let mut ticker = Ticker::start(Instant::now());

    event_loop.run(move |event, _, control_flow| {
        match event {
            Event::NewEvents(_) => {
                if ticker.poll(Instant::now(), game.interval()) {
                    if game.tick() == TickOutcome::Crashed {
                        debug!("snake stopped at {:?}", game.snake().head());
                    }
                    window.request_redraw();
                }
            }

            Event::RedrawRequested(_) => {
                let mut canvas = FrameCanvas::new(pixels.frame_mut(), FRAME_SIZE);
                render(&game, &mut canvas);
                if let Err(err) = pixels.render() {
                    error!("render failed: {err}");
                    *control_flow = ControlFlow::Exit;
                    return;
                }
            }

            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                    return;
                }
                WindowEvent::Resized(size) => {
                    if let Err(err) = pixels.resize_surface(size.width, size.height) {
                        error!("resize failed: {err}");
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => {
                    if let Some(command) = Command::from_key(key) {
                        command.apply(&mut game);
                    }
                }
                _ => {}
            },

            _ => {}
        }

        // sleep until the next tick unless something above asked to exit
        if !matches!(*control_flow, ControlFlow::ExitWithCode(_)) {
            *control_flow = ControlFlow::WaitUntil(ticker.deadline());
        }
    });
}
