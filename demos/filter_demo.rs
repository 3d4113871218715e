//! Runs FIR and IIR filters over small signals and prints the results.
//!
//! Without arguments a fixed set of scenarios is run.  Otherwise the filters
//! are configured from the command line, e.g.
//!
//! ```text
//! cargo run --example filter_demo -- --x=1,0,1 --b=0.5,1,0,-0.5 --a=2,-1,1 --l=5
//! ```
//!
//! Set `RUST_LOG=debug` to see normalization and stability details.

use clap::Parser;
use env_logger::Env;
use lti_filters::prelude::*;
use std::process;

#[derive(Parser)]
struct Args {
    /// Input signal, comma separated
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    x: Vec<f64>,

    /// FIR impulse response, comma separated (default 1,2,1)
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    h: Vec<f64>,

    /// IIR feedforward coefficients, comma separated
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    b: Vec<f64>,

    /// IIR feedback coefficients, comma separated
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    a: Vec<f64>,

    /// IIR output length, 0 for automatic
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    l: isize,
}

impl Args {
    fn is_empty(&self) -> bool {
        self.x.is_empty() && self.h.is_empty() && self.b.is_empty() && self.a.is_empty()
    }
}

fn run_scenarios() -> Result<(), FilterError> {
    println!("--- FIR filter ---");

    let fir = FirFilter::new(vec![1.5, 2.0, 3.5])?;
    println!("x: {:?}", fir.x());
    println!("h: {:?}", fir.h());
    println!("default taps: {:?}", fir.out_signal());

    let mut fir = FirFilter::with_impulse_response(vec![1, 2, 3], vec![3, 2, 1])?;
    println!("custom taps: {:?}", fir.out_signal());
    fir.set_x(vec![2, 1, 3, 7])?;
    fir.set_h(vec![7, 3, 1, 2])?;
    println!("after setters: {:?}", fir.out_signal());

    println!("--- IIR filter ---");

    let mut iir = IirFilter::<f64>::default();
    println!("default coefficients: {:?}", iir.out_signal(&[1.5, 2.0, -1.0]));

    iir.set_b(vec![0.5, 1.0, 0.0, -0.5])?;
    iir.set_a(vec![2.0, -1.0, 1.0])?;
    iir.set_l(2)?;
    println!("after setters: {:?}", iir.out_signal(&[1.0, 0.0, 1.0]));

    iir.set_l(5)?;
    println!("stability: {}", iir.stability());
    println!("b: {:?}", iir.b());
    println!("a: {:?}", iir.a());
    println!("L: {}", iir.l());

    let iir = IirFilter::<i32>::new(vec![2, 0, -1, 1], vec![1, 1, 2])?;
    println!("custom coefficients: {:?}", iir.out_signal(&[1, 0, -1]));
    println!("stability: {}", iir.stability());

    Ok(())
}

fn run_args(args: Args) -> Result<(), FilterError> {
    if !args.h.is_empty() {
        let fir = FirFilter::with_impulse_response(args.x.clone(), args.h)?;
        println!("FIR: {:?}", fir.out_signal());
    } else if args.b.is_empty() && args.a.is_empty() {
        let fir = FirFilter::new(args.x.clone())?;
        println!("FIR: {:?}", fir.out_signal());
    }

    if !args.b.is_empty() || !args.a.is_empty() {
        let mut iir = IirFilter::new(args.b, args.a)?;
        iir.set_l(args.l)?;
        println!("IIR b: {:?}", iir.b());
        println!("IIR a: {:?}", iir.a());
        println!("IIR: {:?}", iir.out_signal(&args.x));
        println!("stability: {}", iir.stability());
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let result = if args.is_empty() {
        run_scenarios()
    } else {
        run_args(args)
    };

    if let Err(err) = result {
        log::error!("{}", err);
        process::exit(1);
    }
}
