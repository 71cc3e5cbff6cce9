//! The public generator.

use prost::Message;
use prost_reflect::{DynamicMessage, MessageDescriptor, ReflectMessage};

use crate::config::Config;
use crate::error::Error;
use crate::source::{RandomSource, StdRandomSource};
use crate::synth::Synthesizer;

/// Generates randomly populated protobuf messages.
///
/// Each instance owns its random stream and its [`Config`]. Generation
/// takes `&mut self`; to generate from several threads give each one its
/// own instance, for example via [`ProtoRand::fork`].
///
/// ```
/// use protorand::{ProtoRand, RandomSource};
///
/// let mut a = ProtoRand::with_seed(42);
/// let mut b = ProtoRand::with_seed(42);
/// assert_eq!(a.source_mut().uint64(), b.source_mut().uint64());
/// ```
#[derive(Debug, Clone)]
pub struct ProtoRand<R = StdRandomSource> {
    source: R,
    config: Config,
}

impl ProtoRand<StdRandomSource> {
    /// A generator seeded from operating system entropy.
    pub fn new() -> Self {
        Self::from_source(StdRandomSource::from_entropy())
    }

    /// A generator whose output is fully determined by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_source(StdRandomSource::with_seed(seed))
    }

    /// An entropy-seeded generator with custom policy.
    pub fn with_config(config: Config) -> Self {
        Self::new().config(config)
    }
}

impl Default for ProtoRand<StdRandomSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> ProtoRand<R> {
    /// A generator drawing from `source` with the default [`Config`].
    pub fn from_source(source: R) -> Self {
        Self {
            source,
            config: Config::default(),
        }
    }

    /// Replaces the policy of this generator.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// The policy used by subsequent generation calls.
    pub fn get_config(&self) -> &Config {
        &self.config
    }

    /// Mutable access to the policy, for adjusting it in place.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// The underlying random stream. Drawing from it advances the stream
    /// that generation uses.
    pub fn source_mut(&mut self) -> &mut R {
        &mut self.source
    }

    /// Reseeds the random stream. Subsequent output is the same as that of
    /// a generator freshly created with `seed`.
    pub fn seed(&mut self, seed: u64) {
        tracing::debug!(seed, "reseeding generator");
        self.source.seed(seed);
    }

    /// Generates a random instance of `descriptor`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFieldKind`] if any reachable field has a
    /// kind that cannot be generated, e.g. a proto2 group. No partially
    /// populated message is returned.
    pub fn generate_dynamic(
        &mut self,
        descriptor: &MessageDescriptor,
    ) -> Result<DynamicMessage, Error> {
        tracing::debug!(
            message = descriptor.full_name(),
            max_depth = self.config.max_depth,
            "generating message"
        );
        let message = Synthesizer::new(&mut self.source, &self.config).generate(descriptor)?;
        tracing::debug!(
            message = descriptor.full_name(),
            encoded_len = message.encoded_len(),
            "generated message"
        );
        Ok(message)
    }

    /// Generates a random instance of the concrete type `M`.
    ///
    /// The message is generated from `M`'s descriptor and then transcoded
    /// through its wire encoding.
    ///
    /// # Errors
    ///
    /// Fails as [`ProtoRand::generate_dynamic`] does, or with
    /// [`Error::Merge`] if `M` cannot decode the generated message.
    pub fn generate<M: ReflectMessage + Default>(&mut self) -> Result<M, Error> {
        let message = self.generate_dynamic(&M::default().descriptor())?;
        message.transcode_to().map_err(|source| Error::Merge {
            message: message.descriptor().full_name().to_string(),
            source,
        })
    }
}

impl<R: RandomSource + Clone> ProtoRand<R> {
    /// An independent generator whose stream is seeded from this one.
    ///
    /// Forking advances this generator by one draw, so a sequence of forks
    /// from a seeded generator is itself reproducible.
    pub fn fork(&mut self) -> Self {
        let seed = self.source.uint64();
        let mut source = self.source.clone();
        source.seed(seed);
        Self {
            source,
            config: self.config.clone(),
        }
    }
}

static_assertions::assert_impl_all!(ProtoRand: Send, Clone);
