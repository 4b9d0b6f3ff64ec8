//! Integration tests: state-space sweeps against closed-form transfer
//! functions, and closed-loop feedback behavior on a coupled 2-DoF plant.

use std::f64::consts::PI;

use nalgebra::{dmatrix, DMatrix};

use attenua_core::{FrequencyGrid, RationalTf, StateSpace, SweepParams, SweepType};
use attenua_solver::{frequency_response, to_bode};

fn analysis_grid() -> FrequencyGrid {
    FrequencyGrid::generate(&SweepParams {
        fstart: 0.01,
        fstop: 100.0,
        num_points: 250,
        sweep_type: SweepType::Decade,
    })
    .unwrap()
}

/// Lightly coupled 2-DoF plant: positions and velocities of two
/// oscillators, force input on the first velocity channel, both positions
/// measured.
fn coupled_two_dof() -> StateSpace {
    let (w1, z1) = (2.0 * PI * 0.8, 0.02);
    let (w2, z2) = (2.0 * PI * 1.6, 0.02);
    let k12 = 0.1 * w1 * w2;

    StateSpace::new(
        dmatrix![
            0.0, 1.0, 0.0, 0.0;
            -w1 * w1, -2.0 * z1 * w1, k12, 0.0;
            0.0, 0.0, 0.0, 1.0;
            k12, 0.0, -w2 * w2, -2.0 * z2 * w2
        ],
        dmatrix![0.0; 1.0; 0.0; 0.0],
        dmatrix![1.0, 0.0, 0.0, 0.0; 0.0, 0.0, 1.0, 0.0],
        DMatrix::zeros(2, 1),
    )
    .unwrap()
}

fn peak(mags: &[f64]) -> (usize, f64) {
    mags.iter()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |(bi, bm), (i, &m)| {
            if m > bm { (i, m) } else { (bi, bm) }
        })
}

#[test]
fn second_order_plant_matches_transfer_function() {
    // w0²/(s² + 2ζw0·s + w0²) in controllable canonical form
    let (w0, zeta) = (2.0 * PI * 0.1, 0.02);
    let sys = StateSpace::new(
        dmatrix![0.0, 1.0; -w0 * w0, -2.0 * zeta * w0],
        dmatrix![0.0; 1.0],
        dmatrix![w0 * w0, 0.0],
        dmatrix![0.0],
    )
    .unwrap();
    let tf = RationalTf::new(&[w0 * w0], &[1.0, 2.0 * zeta * w0, w0 * w0]);
    let grid = analysis_grid();

    let resp = frequency_response(&sys, &grid).unwrap();
    let direct = tf.sweep(&grid);

    for (h_ss, h_tf) in resp.entry(0, 0).iter().zip(direct.iter()) {
        assert!(
            (h_ss - h_tf).norm() < 1e-9 * h_tf.norm().max(1.0),
            "state-space and polynomial paths disagree"
        );
    }
}

#[test]
fn both_resonances_appear_in_both_channels() {
    let sys = coupled_two_dof();
    let grid = analysis_grid();

    let resp = frequency_response(&sys, &grid).unwrap();
    let direct = resp.entry(0, 0);
    let cross = resp.entry(1, 0);

    assert_eq!(direct.len(), grid.len());
    assert_eq!(cross.len(), grid.len());
    // Weak coupling: the cross channel responds, but below the driven one
    // at the first resonance.
    let (i1, _) = peak(&to_bode(&direct).magnitude_db);
    assert!(cross[i1].norm() > 0.0);
    assert!(cross[i1].norm() < direct[i1].norm());
}

#[test]
fn pd_feedback_damps_the_first_resonance() {
    let sys = coupled_two_dof();
    let grid = analysis_grid();

    // u = r − Kp·x1 − Kd·v1
    let (kp, kd) = (50.0, 10.0);
    let closed = sys
        .with_output_feedback(
            &dmatrix![kp, kd],
            &dmatrix![1.0, 0.0, 0.0, 0.0; 0.0, 1.0, 0.0, 0.0],
        )
        .unwrap();

    let open_mag = to_bode(&frequency_response(&sys, &grid).unwrap().entry(0, 0));
    let closed_mag = to_bode(&frequency_response(&closed, &grid).unwrap().entry(0, 0));

    let (_, open_peak) = peak(&open_mag.magnitude_db);
    let (_, closed_peak) = peak(&closed_mag.magnitude_db);

    assert!(
        closed_peak < open_peak - 10.0,
        "PD loop should attenuate the resonance peak: open {open_peak:.1} dB, closed {closed_peak:.1} dB"
    );
}

#[test]
fn proportional_feedback_stiffens_without_damping() {
    let sys = coupled_two_dof();
    let grid = analysis_grid();

    // u = r − Kp·x1 shifts the resonance up but leaves it sharp
    let closed = sys
        .with_output_feedback(&dmatrix![150.0], &dmatrix![1.0, 0.0, 0.0, 0.0])
        .unwrap();

    let open = to_bode(&frequency_response(&sys, &grid).unwrap().entry(0, 0));
    let stiff = to_bode(&frequency_response(&closed, &grid).unwrap().entry(0, 0));

    let (i_open, _) = peak(&open.magnitude_db);
    let (i_stiff, _) = peak(&stiff.magnitude_db);

    assert!(
        grid.omegas()[i_stiff] > grid.omegas()[i_open],
        "proportional feedback should raise the resonant frequency"
    );
}

#[test]
fn lead_compensated_loop_attenuates_the_plant_pole() {
    // Underdamped plant with a lead-like compensator: zero at the
    // resonance, fast pole to roll off the high-frequency gain.
    let (w0, zeta) = (2.0 * PI * 0.1, 0.02);
    let plant = RationalTf::new(&[w0 * w0], &[1.0, 2.0 * zeta * w0, w0 * w0]);

    let gain = 5.0;
    let zero = w0;
    let pole = 2.0 * PI * 10.0;
    let compensator = RationalTf::new(&[gain / zero, gain], &[1.0 / pole, 1.0]);

    let open_loop = compensator.series(&plant);
    let closed_loop = open_loop.unity_feedback();

    let grid = analysis_grid();
    let plant_mag = to_bode(&plant.sweep(&grid)).magnitude_db;
    let closed_mag = to_bode(&closed_loop.sweep(&grid)).magnitude_db;

    let (_, plant_peak) = peak(&plant_mag);
    let (_, closed_peak) = peak(&closed_mag);

    assert!(
        closed_peak < plant_peak - 15.0,
        "lead compensation should suppress the resonance: plant {plant_peak:.1} dB, closed {closed_peak:.1} dB"
    );
}
