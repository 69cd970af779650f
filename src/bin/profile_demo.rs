use trapezoid_profiling::{ProfileError, ProfileGenerator, ProfileParameters, Samples, DEFAULT_STEP};

fn main() -> Result<(), ProfileError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let params = ProfileParameters::new(4.0, 5.0, 10.0);
    let profile = ProfileGenerator::try_from(params)?;

    log::info!(
        "accelerate {:.3}s, cruise {:.3}s, decelerate {:.3}s, total {:.3}s",
        profile.time_accelerate(),
        profile.time_cruise(),
        profile.time_decelerate(),
        profile.get_total_time()
    );

    let samples = Samples::collect(&profile, DEFAULT_STEP)?;

    println!("time,acceleration,velocity,position");
    for (t, state) in samples.iter() {
        println!(
            "{:.2},{:.4},{:.4},{:.4}",
            t, state.acceleration, state.velocity, state.position
        );
    }

    log::info!("wrote {} samples", samples.len());

    Ok(())
}
