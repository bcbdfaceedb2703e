use rand::Rng;
use rasterbox::config::{DEFAULT_MODEL_PATH, DEFAULT_TEXTURE_PATH};
use rasterbox::demos;
use rasterbox::prelude::*;

const USAGE: &str = "usage: rasterbox [noise|greyscale|gradient|lines|stroked|filled|textured|wireframe|scene] [path]";
const SAVE_PATHS: [&str; 2] = ["output.ppm", "output.bmp"];

fn parse_args() -> Result<(Scene, Option<String>), String> {
    let mut args = std::env::args().skip(1);
    let scene = match args.next() {
        Some(arg) if arg == "-h" || arg == "--help" => return Err(USAGE.to_string()),
        Some(arg) => arg.parse()?,
        None => Scene::default(),
    };
    Ok((scene, args.next()))
}

fn report(fill: Fill) {
    if let Fill::Skipped(reason) = fill {
        println!("Skipped triangle: {reason}");
    }
}

/// Draws the 2D demos that need no input. Random triangles are added on key presses instead.
fn draw_demo(
    scene: Scene,
    renderer: &mut Renderer,
    texture: Option<&Texture>,
    rng: &mut impl Rng,
) {
    let mut buffer = renderer.framebuffer();
    match scene {
        Scene::Noise => demos::draw_red_noise(&mut buffer, rng),
        Scene::Greyscale => demos::draw_greyscale(&mut buffer),
        Scene::Gradient => demos::draw_colour_gradient(&mut buffer),
        Scene::Lines => demos::draw_line_fan(&mut buffer),
        Scene::Textured => {
            if let Some(texture) = texture {
                report(demos::draw_textured_demo(&mut buffer, texture));
            }
        }
        Scene::Stroked | Scene::Filled | Scene::Wireframe | Scene::Model => {}
    }
}

fn save_frame(engine: &Engine) -> Result<(), String> {
    for path in SAVE_PATHS {
        engine.save_image(path).map_err(|e| e.to_string())?;
        println!("Saved {path}");
    }
    Ok(())
}

fn main() -> Result<(), String> {
    let (scene, path) = parse_args()?;
    let config = RenderConfig::default();

    let mut window = Window::new("rasterbox", config.width, config.height)?;
    let mut engine = Engine::new(&config);
    let mut rng = rand::thread_rng();

    let mut texture = None;
    match scene {
        Scene::Wireframe | Scene::Model => {
            let model_path = path.as_deref().unwrap_or(DEFAULT_MODEL_PATH);
            engine.load_mesh(model_path).map_err(|e| e.to_string())?;
            println!("Loaded {} triangles from {model_path}", engine.mesh().len());
            if scene == Scene::Wireframe {
                engine.set_render_mode(RenderMode::Wireframe);
            }
        }
        Scene::Textured => {
            let texture_path = path.as_deref().unwrap_or(DEFAULT_TEXTURE_PATH);
            texture = Some(Texture::from_file(texture_path).map_err(|e| e.to_string())?);
        }
        _ => {}
    }

    let background = config.background.pack();
    engine.renderer_mut().clear(background);
    draw_demo(scene, engine.renderer_mut(), texture.as_ref(), &mut rng);

    let mut frame_limiter = FrameLimiter::new(&window, config.frame_target_time());
    let mut last_skipped = Vec::new();

    loop {
        match window.poll_events() {
            WindowEvent::Quit => break,
            WindowEvent::Resize(w, h) => {
                window.resize(w, h)?;
                engine.resize(w, h);
                engine.renderer_mut().clear(background);
                draw_demo(scene, engine.renderer_mut(), texture.as_ref(), &mut rng);
            }
            WindowEvent::Camera(command) => {
                println!("{command}");
                engine.apply_camera_command(command);
            }
            WindowEvent::SaveImage => save_frame(&engine)?,
            WindowEvent::DrawRandom => {
                let mut buffer = engine.renderer_mut().framebuffer();
                match scene {
                    Scene::Stroked => demos::draw_random_stroked_triangle(&mut buffer, &mut rng),
                    Scene::Filled => report(demos::draw_random_filled_triangle(&mut buffer, &mut rng)),
                    _ => {}
                }
            }
            WindowEvent::None => {}
        }

        if scene.uses_mesh() {
            let stats = engine.render();
            if stats.skipped != last_skipped {
                for (index, reason) in &stats.skipped {
                    println!("Skipped triangle {index}: {reason}");
                }
                last_skipped = stats.skipped;
            }
        } else if scene == Scene::Noise {
            draw_demo(scene, engine.renderer_mut(), None, &mut rng);
        }

        window.present(engine.frame_buffer())?;
        frame_limiter.wait(&window);
    }

    Ok(())
}
