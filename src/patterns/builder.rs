//! Builder: a director runs construction steps against any builder.

/// The product assembled by a builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AircraftParts {
    parts: Vec<String>,
}

impl AircraftParts {
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn list_parts(&self) -> String {
        format!("Product Parts: {}", self.parts.join(", "))
    }
}

pub trait AircraftBuilder {
    fn reset(&mut self);
    fn produce_part_a(&mut self);
    fn produce_part_b(&mut self);
    fn produce_part_c(&mut self);

    /// Take the assembled product, leaving the builder reset for the next one.
    fn product(&mut self) -> AircraftParts;
}

#[derive(Debug, Default)]
pub struct PartsBuilder {
    aircraft: AircraftParts,
}

impl AircraftBuilder for PartsBuilder {
    fn reset(&mut self) {
        self.aircraft = AircraftParts::default();
    }

    fn produce_part_a(&mut self) {
        self.aircraft.parts.push("Part A1".to_string());
    }

    fn produce_part_b(&mut self) {
        self.aircraft.parts.push("Part B1".to_string());
    }

    fn produce_part_c(&mut self) {
        self.aircraft.parts.push("Part C1".to_string());
    }

    fn product(&mut self) -> AircraftParts {
        std::mem::take(&mut self.aircraft)
    }
}

/// Knows the order of the building steps, not the parts themselves.
pub struct Director<'a> {
    builder: &'a mut dyn AircraftBuilder,
}

impl<'a> Director<'a> {
    pub fn new(builder: &'a mut dyn AircraftBuilder) -> Self {
        Self { builder }
    }

    pub fn build_minimal_viable_product(&mut self) {
        self.builder.produce_part_a();
    }

    pub fn build_full_featured_product(&mut self) {
        self.builder.produce_part_a();
        self.builder.produce_part_b();
        self.builder.produce_part_c();
    }
}

pub fn client_code() -> Vec<String> {
    let mut builder = PartsBuilder::default();
    let mut lines = Vec::new();

    lines.push("Standard basic product:".to_string());
    Director::new(&mut builder).build_minimal_viable_product();
    lines.push(builder.product().list_parts());

    lines.push("Standard full featured product:".to_string());
    Director::new(&mut builder).build_full_featured_product();
    lines.push(builder.product().list_parts());

    // The builder works without a director too.
    lines.push("Custom product:".to_string());
    builder.produce_part_a();
    builder.produce_part_c();
    lines.push(builder.product().list_parts());

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_code_transcript() {
        assert_eq!(
            client_code(),
            vec![
                "Standard basic product:",
                "Product Parts: Part A1",
                "Standard full featured product:",
                "Product Parts: Part A1, Part B1, Part C1",
                "Custom product:",
                "Product Parts: Part A1, Part C1",
            ]
        );
    }

    #[test]
    fn test_product_resets_builder() {
        let mut builder = PartsBuilder::default();
        builder.produce_part_b();

        assert_eq!(builder.product().parts(), ["Part B1"]);
        assert!(builder.product().parts().is_empty());
    }

    #[test]
    fn test_reset_discards_parts() {
        let mut builder = PartsBuilder::default();
        builder.produce_part_a();
        builder.reset();
        assert_eq!(builder.product(), AircraftParts::default());
    }
}
