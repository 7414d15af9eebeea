use pulsegat::SearchConfig;
use rand::Rng;

fn main() {
    // A 12.5 Hz spike train with 2 ms jitter and a few dropped spikes
    let mut rng = rand::thread_rng();
    let events: Vec<f64> = (0..200)
        .filter_map(|i| {
            if rng.gen_bool(0.9) {
                Some(0.013 + i as f64 * 0.08 + rng.gen_range(-0.002..=0.002))
            } else {
                None
            }
        })
        .collect();

    let config = SearchConfig::new(5.0, 30.0, 0.5, 0.0005);
    let curve = pulsegat::grid_search(&events, &config).unwrap();

    for fit in curve.iter() {
        println!("{:6.1} Hz  rmsd = {:.5} s", fit.freq, fit.rmsd);
    }
    if let Some(best) = curve.best() {
        println!("best fit: {} Hz (rmsd {:.5} s, offset {:.4} s)", best.freq, best.rmsd, best.offset);
    }
}
