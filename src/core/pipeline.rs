use crate::config::layout_config::LayoutConfig;
use crate::core::layout::LayoutPolicy;
use crate::core::render::render_slot;
use crate::core::splice::{insert_net_block, splice_fragments, SpliceOutcome};
use crate::core::{ConfigProvider, Pipeline, PlayerRecord, Storage, TransformResult};
use crate::utils::error::Result;

pub struct RosterPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> RosterPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    async fn layout_policy(&self) -> Result<LayoutPolicy> {
        match self.config.layout_config() {
            Some(path) => {
                tracing::debug!("Loading layout policy from {}", path);
                let data = self.storage.read_file(path).await?;
                let text = String::from_utf8(data)?;
                LayoutConfig::parse(&text)?.into_policy()
            }
            None => LayoutPolicy::named(self.config.layout()),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for RosterPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<PlayerRecord>> {
        let data = self.storage.read_file(self.config.roster_path()).await?;

        // Header names are matched exactly; a row or header missing one of
        // the three fields is a fatal csv error.
        let mut reader = csv::Reader::from_reader(data.as_slice());
        let mut players = Vec::new();
        for row in reader.deserialize::<PlayerRecord>() {
            players.push(row?);
        }

        tracing::debug!(
            "Loaded {} players from {}",
            players.len(),
            self.config.roster_path()
        );
        Ok(players)
    }

    async fn transform(&self, players: Vec<PlayerRecord>) -> Result<TransformResult> {
        let policy = self.layout_policy().await?;
        let player_count = players.len();

        let slots = policy.assign(players);
        let fragments: Vec<String> = slots.iter().map(render_slot).collect();

        tracing::debug!(
            "Assigned {} slots ({} populated)",
            slots.len(),
            player_count
        );
        Ok(TransformResult {
            slots,
            fragments,
            player_count,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let data = self.storage.read_file(self.config.template_path()).await?;
        let template = String::from_utf8(data)?;

        let template = insert_net_block(&template);
        let (output, outcome) = splice_fragments(&template, &result.fragments);
        if outcome == SpliceOutcome::Unmatched {
            tracing::warn!(
                "No list container found in {}; output written without lineup content",
                self.config.template_path()
            );
        }

        self.storage
            .write_file(self.config.output_path(), output.as_bytes())
            .await?;

        Ok(self.config.output_path().to_string())
    }
}
