use pixel_noise::{FixedSeed, NoiseField, ScaledSampler};

fn main() {
    // Seed 2025, then print a 12×12 patch of each preset at t = 0 and t = 50
    let field = NoiseField::from_source(&mut FixedSeed(2025.0));
    let sampler = ScaledSampler::new(field);

    for time in [0.0, 50.0] {
        println!("color variation @ t={time}");
        for y in 0..12 {
            for x in 0..12 {
                print!("{:>7.3} ", sampler.color_variation(x as f64, y as f64, time));
            }
            println!();
        }
        println!();
    }

    println!("raw noise along y = 0.5");
    for i in 0..16 {
        let x = i as f64 * 0.25;
        println!("{x:>5.2} {:>8.4}", sampler.field().sample(x, 0.5));
    }
}
