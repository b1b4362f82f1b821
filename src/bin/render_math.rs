use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use clap::{Parser, Subcommand};
    use render_math::{
        IVector2, IVector3, IVector4, Normalize, Vector, Vector2, Vector3, Vector4,
    };

    #[derive(Debug, Parser)]
    #[command(about = "Inspect vectors from the render_math library", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Pack the given components into an integer color
        Color {
            /// Two to four components, each in [0, 1] for real vectors
            #[arg(required = true, allow_negative_numbers = true)]
            components: Vec<f64>,

            /// Interpret the components as integers (fractions are truncated)
            #[arg(short, long)]
            integer: bool,
        },
        /// Compute the length of the given vector
        Length {
            /// Two to four components
            #[arg(required = true, allow_negative_numbers = true)]
            components: Vec<f64>,

            /// Interpret the components as integers (fractions are truncated)
            #[arg(short, long)]
            integer: bool,
        },
        /// Normalize the given vector
        Normalize {
            /// Two to four components
            #[arg(required = true, allow_negative_numbers = true)]
            components: Vec<f64>,

            /// Interpret the components as integers (fractions are truncated)
            #[arg(short, long)]
            integer: bool,
        },
    }

    #[derive(Clone, Copy, Debug)]
    enum AnyVector {
        Real2(Vector2),
        Real3(Vector3),
        Real4(Vector4),
        Int2(IVector2),
        Int3(IVector3),
        Int4(IVector4),
    }

    impl AnyVector {
        fn parse(components: &[f64], integer: bool) -> Result<Self> {
            let vector = if integer {
                let c: Vec<i64> = components.iter().map(|&c| c as i64).collect();
                match c.as_slice() {
                    &[x, y] => Self::Int2(IVector2::new(x, y)),
                    &[x, y, z] => Self::Int3(IVector3::new(x, y, z)),
                    &[x, y, z, w] => Self::Int4(IVector4::new(x, y, z, w)),
                    _ => anyhow::bail!("Expected 2 to 4 components, got {}", c.len()),
                }
            } else {
                match *components {
                    [x, y] => Self::Real2(Vector2::new(x, y)),
                    [x, y, z] => Self::Real3(Vector3::new(x, y, z)),
                    [x, y, z, w] => Self::Real4(Vector4::new(x, y, z, w)),
                    _ => anyhow::bail!("Expected 2 to 4 components, got {}", components.len()),
                }
            };
            log::debug!("Parsed vector {vector:?}");
            Ok(vector)
        }

        fn color(&self) -> u32 {
            match self {
                Self::Real2(v) => v.to_color_int(),
                Self::Real3(v) => v.to_color_int(),
                Self::Real4(v) => v.to_color_int(),
                Self::Int2(v) => render_math::color::pack_channels(&v.raw()),
                Self::Int3(v) => v.to_color_int(),
                Self::Int4(v) => v.to_color_int(),
            }
        }

        fn length(&self) -> Result<String> {
            Ok(match self {
                Self::Real2(v) => v.length().to_string(),
                Self::Real3(v) => v.length().to_string(),
                Self::Real4(v) => v.length().to_string(),
                Self::Int2(_) => anyhow::bail!("Integer 2D vectors have no length"),
                Self::Int3(v) => v.length().to_string(),
                Self::Int4(v) => v.length().to_string(),
            })
        }

        fn normalized(&self) -> Result<String> {
            Ok(match self {
                Self::Real2(v) => v.normalized().to_string(),
                Self::Real3(v) => v.normalized().to_string(),
                Self::Real4(v) => v.normalized().to_string(),
                Self::Int2(_) => anyhow::bail!("Integer 2D vectors can not be normalized"),
                Self::Int3(v) => v.normalized().to_string(),
                Self::Int4(v) => v.normalized().to_string(),
            })
        }
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();

        match cli.command {
            Command::Color {
                components,
                integer,
            } => {
                let vector = AnyVector::parse(&components, integer)?;
                let width = 2 * components.len();
                println!("0x{:0width$x}", vector.color());
            }
            Command::Length {
                components,
                integer,
            } => {
                println!("{}", AnyVector::parse(&components, integer)?.length()?);
            }
            Command::Normalize {
                components,
                integer,
            } => {
                println!("{}", AnyVector::parse(&components, integer)?.normalized()?);
            }
        }
        Ok(())
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
