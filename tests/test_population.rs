use gompertz_demo::{
    AnalyticalSolver, EulerSolver, ModelParameters, PopulationSolver, Rk4Solver, Solver, SolverError, SolverKind,
};
use plotpy::{Curve, Plot, linspace};
use russell_lab::approx_eq;
use std::collections::HashMap;

const SAVE_FIGURE: bool = false;

fn params() -> HashMap<&'static str, f64> {
    HashMap::from([("p0", 100.0), ("beta0", 2.0), ("alpha", 0.5)])
}

#[test]
fn test_population_methods() {
    // Allocate the solvers
    let h = 0.1;
    let t_max = 10.0;
    let exact = Solver::new(SolverKind::Analytical, params()).unwrap();
    let euler = Solver::new(SolverKind::Euler { step: h, horizon: t_max }, params()).unwrap();
    let rk4 = Solver::new(SolverKind::Rk4 { step: h, horizon: t_max }, params()).unwrap();
    let solvers: [&dyn PopulationSolver; 3] = [&exact, &euler, &rk4];

    // Generate the plot
    if SAVE_FIGURE {
        let tt = linspace(0.0, t_max, 500);
        let mut plot = Plot::new();
        plot.set_subplot(1, 2, 1);
        for (solver, style) in solvers.iter().zip(["-", "--", ":"]) {
            let pp = solver.resolve_all(&tt);
            let mut curve = Curve::new();
            curve.set_label(&solver.label()).set_line_style(style).draw(&tt, &pp);
            plot.add(&curve);
        }
        plot.grid_labels_legend("t", "P");

        // Isoclines
        plot.set_subplot(1, 2, 2);
        for iso in exact.isoclines(&tt, 8).unwrap() {
            let mut curve = Curve::new();
            curve
                .set_label(&format!("C = {:.1}", iso.c))
                .set_line_style("--")
                .draw(&tt, &iso.pp);
            plot.add(&curve);
        }
        let pp = exact.resolve_all(&tt);
        let mut curve = Curve::new();
        curve.set_label("P(t)").draw(&tt, &pp);
        plot.add(&curve)
            .grid_labels_legend("t", "P")
            .set_figure_size_points(800.0, 300.0)
            .save("/tmp/gompertz_demo/test_population_methods.svg")
            .unwrap();
    }

    // The quantities that depend only on the parameters are the same for all solvers
    for solver in &solvers {
        println!("{}\n", solver);
        assert_eq!(solver.resolve(0.0), 100.0);
        approx_eq(solver.asymptotic_limit(), 5459.82, 0.01);
        approx_eq(solver.growth_factor(), f64::exp(4.0), 1e-12);
        approx_eq(solver.growth_rate(3.0), 2.0 * f64::exp(-1.5), 1e-15);
        assert_eq!(solver.isoclines(&[0.0, 5.0], 8).unwrap(), exact.isoclines(&[0.0, 5.0], 8).unwrap());
    }

    // Check the analytical values
    approx_eq(exact.resolve(10.0), 5314.63, 0.01);
    approx_eq(exact.resolve(50.0), 5459.82, 0.01);

    // Check the accuracy of the numerical methods
    let p_ref = exact.resolve(10.0);
    let err_euler = f64::abs(euler.resolve(10.0) - p_ref) / p_ref;
    let err_rk4 = f64::abs(rk4.resolve(10.0) - p_ref) / p_ref;
    println!("t = 10: Euler rel_err = {:e}, RK4 rel_err = {:e}", err_euler, err_rk4);
    assert!(err_euler > 0.01 && err_euler < 0.2);
    assert!(err_rk4 * 1000.0 < err_euler);
}

#[test]
fn test_population_errors() {
    let p = ModelParameters::new(100.0, 2.0, 0.5).unwrap();
    let domain = Some(SolverError::Domain("alpha must be nonzero"));
    assert_eq!(AnalyticalSolver::new(100.0, 2.0, 0.0).err(), domain);
    assert_eq!(EulerSolver::new(100.0, 2.0, 0.0, 0.1, 10.0).err(), domain);
    assert_eq!(Rk4Solver::new(100.0, 2.0, 0.0, 0.1, 10.0).err(), domain);

    for kind in [
        SolverKind::Euler { step: 0.0, horizon: 10.0 },
        SolverKind::Euler { step: 0.1, horizon: 0.0 },
        SolverKind::Rk4 { step: 0.0, horizon: 10.0 },
        SolverKind::Rk4 { step: 0.1, horizon: 0.0 },
    ] {
        match Solver::with_parameters(kind, p) {
            Err(SolverError::InvalidParameter(msg)) => println!("{:?}: {}", kind, msg),
            _ => panic!("{:?} should fail with InvalidParameter", kind),
        }
    }
}

#[test]
fn test_population_grid_and_clamping() {
    let p = ModelParameters::new(100.0, 2.0, 0.5).unwrap();
    for (h, t_max, npoint) in [(0.1, 10.0, 101), (0.3, 1.0, 4), (0.25, 2.0, 9), (0.07, 1.0, 15)] {
        let euler = EulerSolver::with_parameters(p, h, t_max).unwrap();
        let rk4 = Rk4Solver::with_parameters(p, h, t_max).unwrap();
        for solver in [&euler as &dyn PopulationSolver, &rk4] {
            let traj = solver.trajectory().unwrap();
            assert_eq!(traj.len(), npoint);
            assert_eq!(traj.times()[0], 0.0);
            let (t_last, p_last) = traj.last();
            assert!(t_last <= t_max);
            assert!(t_max - t_last < h);
            for (t, p) in traj.iter() {
                assert_eq!(solver.resolve(t), p);
            }
            assert_eq!(solver.resolve(-1.0), 100.0);
            assert_eq!(solver.resolve(t_max + 5.0), p_last);
        }
    }
}

#[test]
fn test_population_concurrent_queries() {
    let p = ModelParameters::new(100.0, 2.0, 0.5).unwrap();
    let solvers: Vec<Box<dyn PopulationSolver>> = vec![
        Box::new(AnalyticalSolver::with_parameters(p)),
        Box::new(EulerSolver::with_parameters(p, 0.01, 10.0).unwrap()),
        Box::new(Rk4Solver::with_parameters(p, 0.01, 10.0).unwrap()),
    ];
    let tt = linspace(0.0, 10.0, 1001);
    let serial: Vec<Vec<f64>> = solvers.iter().map(|s| s.resolve_all(&tt)).collect();
    let times = &tt;
    std::thread::scope(|scope| {
        let handles: Vec<_> = solvers
            .iter()
            .map(|solver| scope.spawn(move || solver.resolve_all(times)))
            .collect();
        for (handle, expected) in handles.into_iter().zip(&serial) {
            assert_eq!(&handle.join().unwrap(), expected);
        }
    });
}
