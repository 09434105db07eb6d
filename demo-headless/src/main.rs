use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use vec3_kit_core::functional as vf;
use vec3_kit_core::Vector;

/// Steering demo: a point agent chases random targets across an arena
#[derive(Parser, Debug)]
#[command(name = "vec3-kit-demo")]
#[command(about = "Headless steering simulation built on vec3-kit", long_about = None)]
struct Args {
    /// Number of simulation steps
    #[arg(short, long, default_value_t = 600)]
    steps: u32,

    /// Time step in seconds
    #[arg(long, default_value_t = 0.05)]
    dt: f64,

    /// Maximum agent speed (units/s)
    #[arg(long, default_value_t = 5.0)]
    max_speed: f64,

    /// Maximum steering force per step
    #[arg(long, default_value_t = 0.5)]
    max_force: f64,

    /// Radius of the arena targets are placed in
    #[arg(short, long, default_value_t = 25.0)]
    arena: f64,

    /// Distance at which a target counts as reached
    #[arg(long, default_value_t = 1.0)]
    arrive_radius: f64,

    /// RNG seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Report interval in seconds
    #[arg(short, long, default_value_t = 2.0)]
    report_interval: f64,

    /// Run validation checks after the simulation
    #[arg(short, long)]
    validate: bool,
}

struct Agent {
    position: Vector,
    velocity: Vector,
}

impl Agent {
    /// Classic seek: steer toward `target`, limited by `max_force` and `max_speed`.
    fn seek(&mut self, target: &Vector, max_speed: f64, max_force: f64, dt: f64) {
        let mut desired = vf::sub(target, self.position);
        desired.set_mag(max_speed);

        let mut steer = vf::sub(&desired, self.velocity);
        steer.max_mag(max_force);

        self.velocity.add(steer).max_mag(max_speed);
        self.position.add(vf::mult(&self.velocity, dt));
    }
}

fn pick_target(rng: &mut StdRng, arena: f64) -> Vector {
    let radius = rng.random_range(0.0..arena);
    vf::mult(&vf::random_2d_with(rng), radius)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    println!("=== vec3-kit Steering Demo ===\n");

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut agent = Agent {
        position: vf::zero(),
        velocity: vf::mult(&vf::random_2d_with(&mut rng), args.max_speed),
    };
    let mut target = pick_target(&mut rng, args.arena);
    info!("First target at {}", target);

    println!(
        "Arena radius: {:.1}, max speed: {:.1}, max force: {:.2}, dt: {:.3}s\n",
        args.arena, args.max_speed, args.max_force, args.dt
    );
    println!("Time(s) | Position              | Speed | Heading(deg) | Distance");
    println!("--------|-----------------------|-------|--------------|---------");

    let mut arrivals = 0u32;
    let mut travelled = 0.0;
    let mut next_report = 0.0;

    for step in 1..=args.steps {
        let previous = agent.position;
        agent.seek(&target, args.max_speed, args.max_force, args.dt);
        travelled += agent.position.dist(&previous);

        if agent.position.dist(&target) <= args.arrive_radius {
            arrivals += 1;
            target = pick_target(&mut rng, args.arena);
            debug!("Arrival #{}; next target at {}", arrivals, target);
        }

        let time = f64::from(step) * args.dt;
        if time >= next_report {
            println!(
                "{:7.2} | ({:8.2}, {:8.2}) | {:5.2} | {:12.1} | {:8.2}",
                time,
                agent.position.x,
                agent.position.y,
                agent.velocity.mag(),
                agent.velocity.heading().to_degrees(),
                agent.position.dist(&target),
            );
            next_report += args.report_interval;
        }
    }

    println!("\n=== Simulation Complete ===");
    println!("Simulated time: {:.2}s", f64::from(args.steps) * args.dt);
    println!("Targets reached: {}", arrivals);
    println!("Distance travelled: {:.2}", travelled);
    println!("Final position: {}", agent.position);

    if args.validate {
        run_validation_tests(&mut rng);
    }
}

fn report(name: &str, passed: bool) {
    if passed {
        println!("  ✓ PASS: {}", name);
    } else {
        println!("  ✗ FAIL: {}", name);
    }
}

fn run_validation_tests(rng: &mut StdRng) {
    println!("\n=== Running Validation Checks ===\n");

    let a = Vector::new(
        rng.random_range(-10.0..10.0),
        rng.random_range(-10.0..10.0),
        rng.random_range(-10.0..10.0),
    );
    let b = vf::random_3d_with(rng);

    let mut restored = a;
    restored.add(b).sub(b);
    report("add then sub restores the vector", restored.dist(&a) < 1e-9);

    report(
        "normalize yields unit length",
        (vf::normalize(&a).mag() - 1.0).abs() < 1e-12,
    );

    let c = vf::cross(&a, &b);
    report(
        "cross product is orthogonal to both inputs",
        c.dot(&a).abs() < 1e-9 && c.dot(&b).abs() < 1e-9,
    );

    let mut unchanged = a;
    unchanged.mult(f64::INFINITY).div(0.0);
    report("non-finite mult and zero div are ignored", unchanged.equals(&a));

    let mut turned = a;
    for _ in 0..4 {
        turned.rotate(std::f64::consts::FRAC_PI_2);
    }
    report("four quarter turns restore the vector", turned.dist(&a) < 1e-9);

    report(
        "angle_between with a zero vector",
        a.angle_between(&vf::zero()) == 0.0 && vf::angle_between(&a, &vf::zero()).is_none(),
    );
}
