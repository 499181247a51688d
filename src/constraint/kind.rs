use crate::constraint::api::{ConstraintApi, ConstraintCtl, HingeApi};

/// Axis-aligned triple in world or body-local coordinates, as the options
/// field requires.
pub type Vec3 = [f64; 3];

// ConstraintKind
//
// The runtime tag the worker dispatches on. Immutable for the life of a
// declaration.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum ConstraintKind {
    PointToPoint,
    ConeTwist,
    Distance,
    Hinge,
    Lock,
}

/// Ball-socket joint: each body pins the connection point in its own frame.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct PointToPointOpts {
    pub pivot_a: Vec3,
    pub pivot_b: Vec3,
    pub max_force: Option<f64>,
}

/// Shoulder-style joint: a point-to-point pivot with swing and twist limits
/// around per-body axes.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ConeTwistOpts {
    pub pivot_a: Vec3,
    pub pivot_b: Vec3,
    pub axis_a: Vec3,
    pub axis_b: Vec3,
    pub angle: Option<f64>,
    pub twist_angle: Option<f64>,
    pub max_force: Option<f64>,
    pub collide_connected: bool,
}

/// Keeps the body centers a fixed distance apart. `distance` defaults to the
/// current separation when unset.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct DistanceOpts {
    pub distance: Option<f64>,
    pub max_force: Option<f64>,
}

/// Door-style joint rotating around per-body axes through per-body pivots.
/// The only kind with a drivable motor.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct HingeOpts {
    pub pivot_a: Vec3,
    pub pivot_b: Vec3,
    pub axis_a: Vec3,
    pub axis_b: Vec3,
    pub collide_connected: bool,
}

/// Welds the two bodies' relative transform.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct LockOpts {
    pub max_force: Option<f64>,
}

// ConstraintOpts
//
// The kind-specific configuration record as it travels to the worker. Opaque
// to the binder: captured at declaration, replayed verbatim on every
// recreate. Changing options is dispose + redeclare.
#[derive(Clone, PartialEq, Debug)]
pub enum ConstraintOpts {
    PointToPoint(PointToPointOpts),
    ConeTwist(ConeTwistOpts),
    Distance(DistanceOpts),
    Hinge(HingeOpts),
    Lock(LockOpts),
}

impl ConstraintOpts {
    pub fn kind(&self) -> ConstraintKind {
        match self {
            Self::PointToPoint(_) => ConstraintKind::PointToPoint,
            Self::ConeTwist(_) => ConstraintKind::ConeTwist,
            Self::Distance(_) => ConstraintKind::Distance,
            Self::Hinge(_) => ConstraintKind::Hinge,
            Self::Lock(_) => ConstraintKind::Lock,
        }
    }
}

/// Compile-time side of [`ConstraintKind`].
///
/// Each marker type fixes the options record accepted at declaration (which
/// carries the runtime tag) and the control-api type handed back to the
/// caller. Motor operations therefore exist only on handles declared as
/// [`Hinge`]; there is no runtime narrowing to get them wrong.
pub trait ConstraintVariant: sealed::Sealed {
    type Opts: Into<ConstraintOpts>;
    type Api;

    fn api(ctl: ConstraintCtl) -> Self::Api;
}

pub struct PointToPoint;
pub struct ConeTwist;
pub struct Distance;
pub struct Hinge;
pub struct Lock;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::PointToPoint {}
    impl Sealed for super::ConeTwist {}
    impl Sealed for super::Distance {}
    impl Sealed for super::Hinge {}
    impl Sealed for super::Lock {}
}

macro_rules! plain_variant {
    ($marker:ident, $opts:ident) => {
        impl From<$opts> for ConstraintOpts {
            fn from(opts: $opts) -> Self {
                ConstraintOpts::$marker(opts)
            }
        }

        impl ConstraintVariant for $marker {
            type Opts = $opts;
            type Api = ConstraintApi;

            fn api(ctl: ConstraintCtl) -> Self::Api {
                ConstraintApi::new(ctl)
            }
        }
    };
}

plain_variant!(PointToPoint, PointToPointOpts);
plain_variant!(ConeTwist, ConeTwistOpts);
plain_variant!(Distance, DistanceOpts);
plain_variant!(Lock, LockOpts);

impl From<HingeOpts> for ConstraintOpts {
    fn from(opts: HingeOpts) -> Self {
        ConstraintOpts::Hinge(opts)
    }
}

impl ConstraintVariant for Hinge {
    type Opts = HingeOpts;
    type Api = HingeApi;

    fn api(ctl: ConstraintCtl) -> Self::Api {
        HingeApi::new(ctl)
    }
}
