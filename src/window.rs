//! SDL2 window, presentation and input translation.

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

use crate::camera::CameraCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    None,
    Quit,
    Resize(u32, u32),
    Camera(CameraCommand),
    /// Mouse click: write the current frame to disk.
    SaveImage,
    /// `f`: draw another random triangle in the triangle demos.
    DrawRandom,
}

/// Camera binding for a key, if any.
pub fn camera_command_for_key(key: Keycode) -> Option<CameraCommand> {
    let command = match key {
        Keycode::Left => CameraCommand::MoveLeft,
        Keycode::Right => CameraCommand::MoveRight,
        Keycode::Up => CameraCommand::MoveUp,
        Keycode::Down => CameraCommand::MoveDown,
        Keycode::I => CameraCommand::MoveIn,
        Keycode::O => CameraCommand::MoveOut,
        Keycode::Z => CameraCommand::PitchUp,
        Keycode::C => CameraCommand::PitchDown,
        Keycode::T => CameraCommand::YawLeft,
        Keycode::U => CameraCommand::YawRight,
        _ => return None,
    };
    Some(command)
}

pub struct FrameLimiter {
    previous_frame_time: u64,
    frame_target_time: u64,
}

impl FrameLimiter {
    pub fn new(window: &Window, frame_target_time: f64) -> Self {
        Self {
            previous_frame_time: window.timer().ticks64(),
            frame_target_time: frame_target_time as u64,
        }
    }

    /// Sleeps until at least one frame target has passed since the last call.
    pub fn wait(&mut self, window: &Window) {
        let elapsed = window
            .timer()
            .ticks64()
            .saturating_sub(self.previous_frame_time);

        if elapsed < self.frame_target_time {
            let time_to_wait = self.frame_target_time - elapsed;
            std::thread::sleep(std::time::Duration::from_millis(time_to_wait));
        }

        self.previous_frame_time = window.timer().ticks64();
    }
}

// Fields drop in declaration order: `texture` must come before
// `texture_creator`.
pub struct Window {
    texture: sdl2::render::Texture<'static>,
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;
        let timer_subsystem = sdl_context.timer()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;

        // SAFETY: texture_creator is boxed, so the reference stays valid while
        // the Window lives, and `texture` is declared first so it drops first.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;

        Ok(Self {
            canvas,
            texture_creator,
            texture,
            event_pump,
            timer_subsystem,
            width,
            height,
        })
    }

    pub fn poll_events(&mut self) -> WindowEvent {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return WindowEvent::Quit,
                Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(w, h),
                    ..
                } => return WindowEvent::Resize(w as u32, h as u32),
                Event::KeyDown {
                    keycode: Some(Keycode::F),
                    ..
                } => return WindowEvent::DrawRandom,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(command) = camera_command_for_key(key) {
                        return WindowEvent::Camera(command);
                    }
                }
                Event::MouseButtonDown { .. } => return WindowEvent::SaveImage,
                _ => {}
            }
        }
        WindowEvent::None
    }

    pub fn present(&mut self, buffer: &[u8]) -> Result<(), String> {
        self.texture
            .update(None, buffer, (self.width * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))?;
        self.canvas.present();
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), String> {
        self.width = width;
        self.height = height;
        // SAFETY: Same as in new() - texture_creator outlives texture
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(self.texture_creator.as_ref() as *const _) };
        self.texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}
