use crate::core::Pipeline;
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub player_count: usize,
    pub output_path: String,
}

pub struct RosterEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> RosterEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Reading roster...");
        let players = self.pipeline.extract().await?;
        let player_count = players.len();
        tracing::info!("Loaded {} players", player_count);

        tracing::info!("Laying out lineup...");
        let result = self.pipeline.transform(players).await?;
        tracing::info!("Rendered {} fragments", result.fragments.len());

        tracing::info!("Writing output...");
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(RunSummary {
            player_count,
            output_path,
        })
    }
}
