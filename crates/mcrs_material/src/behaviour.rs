use serde::Serialize;

/// Family-wide physical constants. Every variant of a family carries a copy.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Properties {
    pub hardness: f32,
    pub explosion_resistance: f32,
    pub max_stack_size: u8,
    /// Ticks of furnace burn time; zero when the block is not a fuel.
    pub fuel_power: u16,
    pub ignited_by_lava: bool,
    pub requires_correct_tool_for_drops: bool,
}

impl Properties {
    pub const fn new() -> Self {
        Properties {
            hardness: 0.0,
            explosion_resistance: 0.0,
            max_stack_size: 64,
            fuel_power: 0,
            ignited_by_lava: false,
            requires_correct_tool_for_drops: false,
        }
    }

    pub const fn with_strength(mut self, value: f32) -> Self {
        self.hardness = value;
        self.explosion_resistance = value;
        self
    }

    pub const fn with_hardness(mut self, value: f32) -> Self {
        self.hardness = value;
        self
    }

    pub const fn with_explosion_resistance(mut self, value: f32) -> Self {
        self.explosion_resistance = value.max(0.0);
        self
    }

    pub const fn instant_break(self) -> Self {
        self.with_hardness(0.0).with_explosion_resistance(0.0)
    }

    pub const fn ignited_by_lava(mut self) -> Self {
        self.ignited_by_lava = true;
        self
    }

    pub const fn requires_correct_tool_for_drops(mut self) -> Self {
        self.requires_correct_tool_for_drops = true;
        self
    }

    pub const fn with_max_stack_size(mut self, value: u8) -> Self {
        self.max_stack_size = value;
        self
    }

    pub const fn with_fuel_power(mut self, value: u16) -> Self {
        self.fuel_power = value;
        self
    }
}

impl Default for Properties {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_compose() {
        const PROPERTIES: Properties = Properties::new()
            .with_strength(2.5)
            .with_explosion_resistance(-1.0)
            .with_fuel_power(300)
            .with_max_stack_size(16)
            .ignited_by_lava();

        assert_eq!(PROPERTIES.hardness, 2.5);
        assert_eq!(PROPERTIES.explosion_resistance, 0.0);
        assert_eq!(PROPERTIES.fuel_power, 300);
        assert_eq!(PROPERTIES.max_stack_size, 16);
        assert_eq!(Properties::new().max_stack_size, 64);
        assert!(PROPERTIES.ignited_by_lava);
        assert!(!PROPERTIES.requires_correct_tool_for_drops);
        assert_eq!(Properties::new().with_hardness(3.0).instant_break(), Properties::new());
    }
}
