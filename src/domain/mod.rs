// Domain layer: ports (interfaces). No dependencies beyond std.

pub mod ports;
