extern crate hermite_spline;

use hermite_spline::{Sample, Spline};

fn main() {
    // raw light intensity readings, damped with flat tangents at both ends
    let samples = vec![
        Sample::new(0.1, 0.3),
        Sample::new(0.4, 0.6),
        Sample::new(1.0, 1.0),
        Sample::new(2.0, 1.6),
        Sample::new(2.5, 2.0),
    ];

    let spline = Spline::from_samples(samples, 0.0, 0.0).unwrap();

    let x_min = 0.0;
    let x_max = 3.0;
    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;

    println!("x;y");
    for i in 0..=number_of_steps {
        let x = x_min + step * i as f64;
        println!("{:.2};{:.2}", x, spline.evaluate(x));
    }
}
