use std::env;
use std::error::Error;
use std::fs;

use fractal_presets::{Coord, Viewpoint, ViewpointRegistry};

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let registry = ViewpointRegistry::builtin();

    match args.first().map(String::as_str) {
        None | Some("list") => list(&registry),
        Some("show") => {
            let index: usize = args
                .get(1)
                .ok_or("usage: show <index>")?
                .parse()?;
            show(&registry, index)?;
        }
        Some("random") => {
            let mut rng = rand::thread_rng();
            if let Some(vp) = registry.random(&mut rng) {
                print_viewpoint(vp);
            }
        }
        Some("nearest") => {
            let re: f64 = args.get(1).ok_or("usage: nearest <re> <im>")?.parse()?;
            let im: f64 = args.get(2).ok_or("usage: nearest <re> <im>")?.parse()?;
            if let Some((idx, dist)) = registry.nearest(Coord::new(re, im)) {
                let vp = registry.get(idx)?;
                println!("#{:<2} {:<22} ({}, {})  dist {:.6}",
                         idx, vp.name, vp.position.re, vp.position.im, dist);
            }
        }
        Some("export") => {
            let path = args.get(1).ok_or("usage: export <file.json>")?;
            fs::write(path, registry.to_json()?)?;
            println!("wrote {} presets to {}", registry.count(), path);
        }
        Some("import") => {
            let path = args.get(1).ok_or("usage: import <file.json>")?;
            let custom = ViewpointRegistry::from_json(&fs::read_to_string(path)?)?;
            println!("{}: {} presets", path, custom.count());
            list(&custom);
        }
        Some(other) => {
            eprintln!("unknown command '{}'", other);
            eprintln!("commands: list | show <index> | random | nearest <re> <im> | export <file> | import <file>");
            std::process::exit(2);
        }
    }

    Ok(())
}

fn list(registry: &ViewpointRegistry) {
    println!("{} mandelbrot presets:", registry.count());
    for (i, vp) in registry.all().iter().enumerate() {
        println!("  #{:<2} {:<22} ({}, {})", i, vp.name, vp.position.re, vp.position.im);
    }
}

fn show(registry: &ViewpointRegistry, index: usize) -> Result<(), Box<dyn Error>> {
    let vp = registry.get(index)?;
    print_viewpoint(vp);
    println!("  next: {}  prev: {}",
             registry.get(registry.next_index(index))?.name,
             registry.get(registry.prev_index(index))?.name);
    Ok(())
}

fn print_viewpoint(vp: &Viewpoint) {
    println!("{}", vp.name);
    println!("  re: {}", vp.position.re);
    println!("  im: {}", vp.position.im);
}
