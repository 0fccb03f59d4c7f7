use densweep::sweep::animator::Mode;
use densweep::sweep::presets::{
    beta_sweep, chi_squared_sweep, f_sweep, normal_panels, t_sweep,
};
use densweep::sweep::{Animation, DualPanelAnimator, Sweep, SweepAnimator, SweepKind};

const SAMPLES: usize = 1000;

fn overlay_sweeps() -> Vec<Sweep> {
    vec![
        t_sweep(SAMPLES).unwrap(),
        beta_sweep(SAMPLES).unwrap(),
        chi_squared_sweep(SAMPLES).unwrap(),
        f_sweep(SAMPLES).unwrap(),
    ]
}

fn assert_frames_well_formed(sweep: Sweep) {
    let n_params = sweep.len();
    let n_grid = sweep.grid.len();
    let title = sweep.title.clone();
    let mut anim = SweepAnimator::new(sweep);
    let mut rendered = 0;
    for frame in anim.by_ref() {
        let frame = frame.unwrap();
        assert_eq!(frame.curve.len(), n_grid, "{title}: curve length");
        assert!(
            frame.curve.iter().all(|&y| y >= 0.0),
            "{title}: negative density in {}",
            frame.label
        );
        rendered += 1;
    }
    assert_eq!(rendered, n_params, "{title}: frame count");
    assert_eq!(anim.surface().flushes(), n_params);
}

#[test]
fn every_sweep_renders_one_frame_per_parameter() {
    for sweep in overlay_sweeps() {
        assert_frames_well_formed(sweep);
    }
    let (top, bottom) = normal_panels(SAMPLES).unwrap();
    assert_frames_well_formed(top);
    assert_frames_well_formed(bottom);
}

#[test]
fn replace_mode_never_shows_more_than_one_curve() {
    let (top, bottom) = normal_panels(SAMPLES).unwrap();
    assert_eq!(top.mode, Mode::Replace);
    assert_eq!(bottom.mode, Mode::Replace);
    let mut anim = DualPanelAnimator::new("normal", top, bottom);
    while anim.step().unwrap().is_some() {
        for surface in anim.surfaces() {
            assert!(surface.lines().len() <= 1);
            assert!(surface.legend().len() <= 1);
        }
    }
    assert!(anim.is_finished());
}

#[test]
fn overlay_mode_keeps_every_curve() {
    for sweep in overlay_sweeps() {
        assert_eq!(sweep.mode, Mode::Overlay);
        let expected = sweep.len() + usize::from(sweep.epilogue.is_some());
        let title = sweep.title.clone();
        let mut anim = SweepAnimator::new(sweep);
        while anim.step().unwrap().is_some() {}
        assert_eq!(anim.surface().lines().len(), expected, "{title}");
    }
}

#[test]
fn t_sweep_ends_with_standard_normal() {
    let mut anim = SweepAnimator::new(t_sweep(SAMPLES).unwrap());
    assert_eq!(anim.by_ref().count(), 30);
    let surface = anim.surface();
    assert_eq!(surface.lines().len(), 31);
    let last = surface.lines().last().unwrap();
    assert_eq!(last.name, "Z Distribution");
    assert_eq!(surface.legend().len(), 1);
    assert!(surface.legend().contains("Z Distribution"));
    assert_eq!(surface.annotation().unwrap().text, "0.1 ≤ d.f. ≤ 60");
}

#[test]
fn axis_limits_do_not_move_during_playback() {
    for kind in [SweepKind::Normal, SweepKind::T, SweepKind::F] {
        let mut anim = kind.build(SAMPLES).unwrap();
        let before: Vec<_> = anim.surfaces().iter().map(|s| s.limits()).collect();
        while anim.step().unwrap().is_some() {
            let now: Vec<_> = anim.surfaces().iter().map(|s| s.limits()).collect();
            assert_eq!(before, now, "{kind:?}");
        }
    }
}

#[test]
fn colors_follow_sweep_position() {
    let mut anim = SweepAnimator::new(chi_squared_sweep(SAMPLES).unwrap());
    while anim.step().unwrap().is_some() {}
    let lines = anim.surface().lines();
    let luma = |i: usize| {
        let c = lines[i].color;
        c.0 as u32 + c.1 as u32 + c.2 as u32
    };
    // Blues darkens toward the end of the sweep
    assert!(luma(lines.len() - 1) < luma(0));
}
