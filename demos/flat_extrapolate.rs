extern crate hermite_spline;

use hermite_spline::{ControlPoint, Spline};

fn main() {
    let points = vec![
        ControlPoint::flat(1.0, 1.0),
        ControlPoint::new(2.0, 0.0, -1.0),
        ControlPoint::new(3.0, -2.0, 0.5),
        ControlPoint::new(4.0, 1.0, 1.0),
        ControlPoint::flat(5.0, 1.0),
    ];

    let spline = Spline::new(points).unwrap();

    // sweep one unit past the domain on both sides to show the flat extension
    let x_min = spline.min_x() - 1.0;
    let x_max = spline.max_x() + 1.0;
    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;

    println!("x;y");
    for i in 0..=number_of_steps {
        let x = x_min + step * i as f64;
        println!("{:.2};{:.2}", x, spline.evaluate(x));
    }
}
