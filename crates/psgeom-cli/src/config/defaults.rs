use psgeom::core::grid::SweepOrder;
use psgeom::core::io::table::TableFormat;

pub struct DefaultsConfig {
    pub time: f64,
    pub order: SweepOrder,
    pub output_path: String,
    pub output_format: Option<TableFormat>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            time: 0.0,
            order: SweepOrder::XMajor,
            output_path: "geometry.dat".to_string(),
            // Inferred from the output extension when unset.
            output_format: None,
        }
    }
}
