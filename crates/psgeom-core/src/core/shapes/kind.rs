use phf::phf_map;
use std::fmt;

/// Every shape function the library can evaluate, named after the geometry
/// functions PolySwift++ input files refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    LeftFlatWall,
    RightFlatWall,
    BottomFlatWall,
    TopFlatWall,
    NegZFlatWall,
    PosZFlatWall,
    LeftSineWall,
    RightSineWall,
    LeftSineZWall,
    NegZSineWall,
    PosZSineWall,
    NegZCrenaWall,
    Cylinder,
    CylinderPtcl,
    ChiPatch,
    Tricorne,
    StripeRegionsX,
    StripeRegionsY,
    ZoneAnnealX,
}

static REGISTRY: phf::Map<&'static str, ShapeKind> = phf_map! {
    "leftFlatWall" => ShapeKind::LeftFlatWall,
    "rightFlatWall" => ShapeKind::RightFlatWall,
    "bottomFlatWall" => ShapeKind::BottomFlatWall,
    "topFlatWall" => ShapeKind::TopFlatWall,
    "negZFlatWall" => ShapeKind::NegZFlatWall,
    "posZFlatWall" => ShapeKind::PosZFlatWall,
    "leftSineWall" => ShapeKind::LeftSineWall,
    "rightSineWall" => ShapeKind::RightSineWall,
    "leftSineZWall" => ShapeKind::LeftSineZWall,
    "negZSineWall" => ShapeKind::NegZSineWall,
    "posZSineWall" => ShapeKind::PosZSineWall,
    "negZCrenaWall" => ShapeKind::NegZCrenaWall,
    "cylinder" => ShapeKind::Cylinder,
    "cylinderPtcl" => ShapeKind::CylinderPtcl,
    "chiPatch" => ShapeKind::ChiPatch,
    "tricorne" => ShapeKind::Tricorne,
    "stripeRegionsX" => ShapeKind::StripeRegionsX,
    "stripeRegionsY" => ShapeKind::StripeRegionsY,
    "zoneAnnealX" => ShapeKind::ZoneAnnealX,
    // Interacting-surface input files name the y-normal walls low/high.
    "lowFlatWall" => ShapeKind::LeftFlatWall,
    "highFlatWall" => ShapeKind::RightFlatWall,
    "lowSineWall" => ShapeKind::LeftSineWall,
    "highSineWall" => ShapeKind::RightSineWall,
};

const ALL: [ShapeKind; 19] = [
    ShapeKind::LeftFlatWall,
    ShapeKind::RightFlatWall,
    ShapeKind::BottomFlatWall,
    ShapeKind::TopFlatWall,
    ShapeKind::NegZFlatWall,
    ShapeKind::PosZFlatWall,
    ShapeKind::LeftSineWall,
    ShapeKind::RightSineWall,
    ShapeKind::LeftSineZWall,
    ShapeKind::NegZSineWall,
    ShapeKind::PosZSineWall,
    ShapeKind::NegZCrenaWall,
    ShapeKind::Cylinder,
    ShapeKind::CylinderPtcl,
    ShapeKind::ChiPatch,
    ShapeKind::Tricorne,
    ShapeKind::StripeRegionsX,
    ShapeKind::StripeRegionsY,
    ShapeKind::ZoneAnnealX,
];

const FLAT_WALL_PARAMS: &[&str] = &["widthParam", "walledge"];
const SINE_WALL_PARAMS: &[&str] = &["widthParam", "walledge", "amplitude", "freq"];
const CRENA_WALL_PARAMS: &[&str] = &[
    "widthParam",
    "lowEdge",
    "highEdge",
    "edgeSharpness",
    "freq",
];
const CYLINDER_PARAMS: &[&str] = &[
    "radius",
    "widthParam",
    "cylcenterX",
    "cylcenterY",
    "cylcenterZ",
];
const CHI_PATCH_PARAMS: &[&str] = &[
    "radius",
    "chiNBase",
    "chiNDel",
    "cylcenterX",
    "cylcenterY",
    "cylcenterZ",
];
const TRICORNE_PARAMS: &[&str] = &[
    "radius",
    "outRadius",
    "widthParam",
    "cylcenterX",
    "cylcenterY",
    "cylcenterZ",
];
const STRIPE_PARAMS: &[&str] = &["leftedge", "rightedge"];
const ZONE_ANNEAL_PARAMS: &[&str] = &[
    "zoneSize",
    "widthParam",
    "chiNmax",
    "chiNmin",
    "initialXpos",
    "zoneRate",
];

impl ShapeKind {
    /// Resolves a shape name (canonical or alias).
    pub fn from_name(name: &str) -> Option<Self> {
        REGISTRY.get(name).copied()
    }

    pub fn all() -> &'static [ShapeKind] {
        &ALL
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::LeftFlatWall => "leftFlatWall",
            ShapeKind::RightFlatWall => "rightFlatWall",
            ShapeKind::BottomFlatWall => "bottomFlatWall",
            ShapeKind::TopFlatWall => "topFlatWall",
            ShapeKind::NegZFlatWall => "negZFlatWall",
            ShapeKind::PosZFlatWall => "posZFlatWall",
            ShapeKind::LeftSineWall => "leftSineWall",
            ShapeKind::RightSineWall => "rightSineWall",
            ShapeKind::LeftSineZWall => "leftSineZWall",
            ShapeKind::NegZSineWall => "negZSineWall",
            ShapeKind::PosZSineWall => "posZSineWall",
            ShapeKind::NegZCrenaWall => "negZCrenaWall",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::CylinderPtcl => "cylinderPtcl",
            ShapeKind::ChiPatch => "chiPatch",
            ShapeKind::Tricorne => "tricorne",
            ShapeKind::StripeRegionsX => "stripeRegionsX",
            ShapeKind::StripeRegionsY => "stripeRegionsY",
            ShapeKind::ZoneAnnealX => "zoneAnnealX",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ShapeKind::LeftFlatWall => "Flat wall on the low-y side of the system",
            ShapeKind::RightFlatWall => "Flat wall on the high-y side of the system",
            ShapeKind::BottomFlatWall => "Flat wall on the low-x side of the system",
            ShapeKind::TopFlatWall => "Flat wall on the high-x side of the system",
            ShapeKind::NegZFlatWall => "Flat wall on the negative-z side of the system",
            ShapeKind::PosZFlatWall => "Flat wall above a plane at positive z",
            ShapeKind::LeftSineWall => "Low-y wall whose edge follows a sine along x",
            ShapeKind::RightSineWall => "High-y wall whose edge follows a sine along x",
            ShapeKind::LeftSineZWall => "Low-y wall whose edge follows a sine along z",
            ShapeKind::NegZSineWall => "Negative-z wall whose edge follows a sine along y",
            ShapeKind::PosZSineWall => "Positive-z wall whose edge follows a sine along y",
            ShapeKind::NegZCrenaWall => "Negative-z wall with a crenellated edge along y",
            ShapeKind::Cylinder => "Hollow cylinder: 0 inside the radius, 1 outside",
            ShapeKind::CylinderPtcl => "Filled cylinder particle: 1 inside the radius, 0 outside",
            ShapeKind::ChiPatch => "Circular patch raising chiN from chiNBase by chiNDel",
            ShapeKind::Tricorne => "Hollow three-lobed cylinder between radius and outRadius",
            ShapeKind::StripeRegionsX => "One or two sharp stripes bounded along x",
            ShapeKind::StripeRegionsY => "One or two sharp stripes bounded along y",
            ShapeKind::ZoneAnnealX => "chiN anneal zone moving along x with time",
        }
    }

    pub fn required_parameters(self) -> &'static [&'static str] {
        match self {
            ShapeKind::LeftFlatWall
            | ShapeKind::RightFlatWall
            | ShapeKind::BottomFlatWall
            | ShapeKind::TopFlatWall
            | ShapeKind::NegZFlatWall
            | ShapeKind::PosZFlatWall => FLAT_WALL_PARAMS,
            ShapeKind::LeftSineWall
            | ShapeKind::RightSineWall
            | ShapeKind::LeftSineZWall
            | ShapeKind::NegZSineWall
            | ShapeKind::PosZSineWall => SINE_WALL_PARAMS,
            ShapeKind::NegZCrenaWall => CRENA_WALL_PARAMS,
            ShapeKind::Cylinder | ShapeKind::CylinderPtcl => CYLINDER_PARAMS,
            ShapeKind::ChiPatch => CHI_PATCH_PARAMS,
            ShapeKind::Tricorne => TRICORNE_PARAMS,
            ShapeKind::StripeRegionsX | ShapeKind::StripeRegionsY => STRIPE_PARAMS,
            ShapeKind::ZoneAnnealX => ZONE_ANNEAL_PARAMS,
        }
    }

    pub fn optional_parameters(self) -> &'static [&'static str] {
        match self {
            ShapeKind::ChiPatch => &["widthParam"],
            ShapeKind::StripeRegionsX | ShapeKind::StripeRegionsY => {
                &["leftedge2", "rightedge2"]
            }
            _ => &[],
        }
    }

    /// Required parameters followed by optional ones.
    pub fn parameter_names(self) -> impl Iterator<Item = &'static str> {
        self.required_parameters()
            .iter()
            .chain(self.optional_parameters())
            .copied()
    }

    pub fn accepts_parameter(self, name: &str) -> bool {
        self.required_parameters().contains(&name)
            || self.optional_parameters().contains(&name)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
