//! End-to-end tests: drawing entities in, G-code out.

use pathcam::geometry::Move;
use pathcam::math::Vector;
use pathcam::model::{Model, RecordingObserver, StitchConfig, StitchEvent, TracingObserver};
use pathcam::operations::{
    EmitModel, Entity, GcodeConfig, ImportConfig, ImportEntities, PolylineVertex, WriteGcode,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn v(x: f64, y: f64) -> Vector {
    Vector::new(x, y)
}

fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Entity {
    Entity::Line {
        start: v(x1, y1),
        end: v(x2, y2),
    }
}

/// A slot: two straight sides joined by half-circle ends, drawn as
/// unordered lines and arcs, one side drawn backwards.
fn slot() -> Vec<Entity> {
    vec![
        Entity::Arc {
            center: v(4.0, 1.0),
            radius: 1.0,
            start_angle: 270.0,
            end_angle: 90.0,
        },
        line(0.0, 2.0, 4.0, 2.0),
        Entity::Arc {
            center: v(0.0, 1.0),
            radius: 1.0,
            start_angle: 90.0,
            end_angle: 270.0,
        },
        line(0.0, 0.0, 4.0, 0.0),
    ]
}

#[test]
fn slot_becomes_one_counter_clockwise_loop() {
    init_tracing();

    let (model, report) = ImportEntities::default().execute(slot()).unwrap();
    assert_eq!(report.imported, 4);
    assert_eq!(model.len(), 1);

    let path = model.iter().next().unwrap();
    assert_eq!(path.len(), 4);
    assert!(path.is_closed());
    assert!(path.is_continuous());
    assert!(!path.is_clockwise());
    assert!(path
        .moves()
        .iter()
        .filter_map(|m| match m {
            Move::Arc(arc) => Some(arc),
            Move::Line(_) => None,
        })
        .all(|arc| !arc.is_clockwise()));
}

#[test]
fn slot_program() {
    init_tracing();

    let (model, _) = ImportEntities::default().execute(slot()).unwrap();
    let emitted = EmitModel::new(&model).execute();
    let program = WriteGcode::new(GcodeConfig {
        decimals: 3,
        ..GcodeConfig::default()
    })
    .execute(&emitted);

    let lines: Vec<&str> = program.lines().collect();
    assert_eq!(lines[0], "(Block-name: 0)");
    assert!(lines[1].starts_with("G0 "));
    assert_eq!(lines.len(), 6);
    assert_eq!(lines.iter().filter(|l| l.starts_with("G1 ")).count(), 2);
    assert_eq!(lines.iter().filter(|l| l.starts_with("G3 ")).count(), 2);
    assert!(!program.contains("-0.000"));
}

#[test]
fn scattered_entities_keep_separate_blocks() {
    init_tracing();

    let entities = vec![
        line(0.0, 0.0, 1.0, 0.0),
        Entity::Circle {
            center: v(10.0, 10.0),
            radius: 2.0,
        },
        Entity::Spline {
            degree: 3,
            control_points: vec![v(0.0, 0.0), v(1.0, 2.0), v(2.0, 2.0), v(3.0, 0.0)],
            closed: false,
        },
        line(1.0, 0.0, 1.0, 1.0),
        Entity::Polyline {
            vertices: vec![
                PolylineVertex::line(20.0, 0.0),
                PolylineVertex::new(22.0, 0.0, -1.0),
                PolylineVertex::line(24.0, 0.0),
            ],
            closed: false,
        },
    ];

    let (model, report) = ImportEntities::default().execute(entities).unwrap();
    assert_eq!(report.imported, 4);
    assert_eq!(report.unsupported, 1);
    assert_eq!(model.len(), 3);

    let emitted = EmitModel::new(&model).execute();
    let program = WriteGcode::default().execute(&emitted);
    assert!(program.contains("(Block-name: 0)"));
    assert!(program.contains("(Block-name: 2)"));
    assert!(program.contains("G2 X24.00000 Y0.00000 I1.00000 J0.00000"));
}

#[test]
fn coarse_precision_stitches_imprecise_drawing() {
    init_tracing();

    let config = ImportConfig::with_precision(2).unwrap();
    let entities = vec![
        line(0.0, 0.0, 1.001, 0.0),
        line(0.999, 0.0, 1.0, 1.0),
        line(1.0, 1.002, 0.0, 0.0),
    ];

    let mut model = Model::with_observer(config.stitch, RecordingObserver::new());
    ImportEntities::new(config)
        .execute_into(entities, &mut model)
        .unwrap();

    assert_eq!(model.len(), 1);
    assert!(model.iter().next().unwrap().is_closed());
    assert!(model
        .observer()
        .events()
        .iter()
        .any(|e| matches!(e, StitchEvent::LoopClosed { .. })));
}

#[test]
fn partial_imports_merge_into_one_model() {
    init_tracing();

    let importer = ImportEntities::default();
    let (left, _) = importer
        .execute(vec![line(0.0, 0.0, 1.0, 0.0), line(1.0, 0.0, 1.0, 1.0)])
        .unwrap();
    let (right, _) = importer
        .execute(vec![line(1.0, 1.0, 0.0, 1.0), line(0.0, 1.0, 0.0, 0.0)])
        .unwrap();

    let mut model = Model::with_observer(StitchConfig::default(), TracingObserver);
    model.absorb(left).unwrap();
    model.absorb(right).unwrap();

    assert_eq!(model.len(), 1);
    let path = model.iter().next().unwrap();
    assert_eq!(path.len(), 4);
    assert!(path.is_closed());
}
