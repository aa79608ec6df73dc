use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Drives a [`Pipeline`] through its three phases and reports progress on
/// standard output. Optionally samples CPU/memory after each phase.
pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn run(&self) -> Result<String> {
        println!("Starting ETL process...");

        // Extract
        println!("Extracting data...");
        let raw_rows = self.pipeline.extract()?;
        println!("Extracted {} rows", raw_rows.len());
        self.monitor.log_stats("Extract");

        // Transform
        println!("Transforming data...");
        let transformed = self.pipeline.transform(raw_rows)?;
        println!("Transformed {} actors", transformed.actors.len());
        self.monitor.log_stats("Transform");

        // Load
        println!("Loading data...");
        let output_path = self.pipeline.load(transformed)?;
        self.monitor.log_stats("Load");

        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
