use crate::pipeline::{Generated, generate};
use anstream::ColorChoice;
use anyhow::Result;
use kwgen_config::Config;
use kwgen_fs::{FileEmitter, FileLoader};
use kwgen_shell::Shell;
use std::time::Instant;

#[derive(Debug)]
pub struct Session {
    config: Config,
    shell: Shell,
    pub measure_time: bool,
}

impl Session {
    pub fn new(config: Config, color_choice: ColorChoice) -> Self {
        Self {
            config,
            shell: Shell::new(color_choice),
            measure_time: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn shell(&mut self) -> &mut Shell {
        &mut self.shell
    }

    /// Runs the generator and reports the result on the shell.
    pub fn generate<F>(&mut self, files: &mut F) -> Result<Generated>
    where
        F: FileLoader + FileEmitter,
    {
        let mut generated = None;

        self.measure_time(
            |sess| {
                let result = generate(files, &sess.config)?;

                sess.shell().status(
                    "Generated",
                    format!(
                        "{} {} into {}",
                        result.keywords.len(),
                        plural(result.keywords.len(), "keyword", "keywords"),
                        result.output_path.display()
                    ),
                )?;

                generated = Some(result);
                Ok(())
            },
            "to generate keyword table",
        )?;

        generated.ok_or_else(|| anyhow::anyhow!("generator finished without a result"))
    }

    /// Measure the time taken to run a closure and print it to the shell
    pub fn measure_time(
        &mut self,
        f: impl FnOnce(&mut Session) -> Result<()>,
        msg: impl Into<String>,
    ) -> Result<()> {
        let start = Instant::now();
        f(self)?;

        if self.measure_time {
            let elapsed = start.elapsed();
            self.shell()
                .status("Took", format!("{:?} {}", elapsed, msg.into()))?;
        }

        Ok(())
    }
}

pub fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}
