//! Step-by-step construction of a [`Computer`], with a [`Director`] knowing the
//! standard configurations.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Computer {
    parts: Vec<String>,
}

impl Computer {
    pub fn add(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn list_parts(&self) -> String {
        format!("Computer parts: {}", self.parts.join(", "))
    }
}

pub trait ComputerBuilder {
    fn reset(&mut self);
    fn set_cpu(&mut self);
    fn set_memory(&mut self);
    fn set_storage(&mut self);
    fn set_graphics(&mut self);
    /// Hands over the computer built so far and starts a fresh one.
    fn get_result(&mut self) -> Computer;
}

macro_rules! parts_builder {
    ($name:ident, $cpu:literal, $memory:literal, $storage:literal, $graphics:literal) => {
        #[derive(Debug, Default)]
        pub struct $name {
            computer: Computer,
        }

        impl ComputerBuilder for $name {
            fn reset(&mut self) {
                self.computer = Computer::default();
            }

            fn set_cpu(&mut self) {
                self.computer.add($cpu);
            }

            fn set_memory(&mut self) {
                self.computer.add($memory);
            }

            fn set_storage(&mut self) {
                self.computer.add($storage);
            }

            fn set_graphics(&mut self) {
                self.computer.add($graphics);
            }

            fn get_result(&mut self) -> Computer {
                std::mem::take(&mut self.computer)
            }
        }
    };
}

parts_builder!(
    GamingComputerBuilder,
    "Intel Core i9-13900K",
    "64GB DDR5 RAM",
    "2TB NVMe SSD",
    "NVIDIA RTX 4090"
);
parts_builder!(
    OfficeComputerBuilder,
    "Intel Core i5-12400",
    "16GB DDR4 RAM",
    "512GB SSD",
    "Intel UHD Graphics 730"
);

/// Runs builders through fixed step sequences.
#[derive(Debug, Default)]
pub struct Director;

impl Director {
    /// cpu, memory, storage
    pub fn build_minimal(&self, builder: &mut dyn ComputerBuilder) {
        builder.reset();
        builder.set_cpu();
        builder.set_memory();
        builder.set_storage();
    }

    /// The minimal build plus graphics.
    pub fn build_full(&self, builder: &mut dyn ComputerBuilder) {
        self.build_minimal(builder);
        builder.set_graphics();
    }
}
