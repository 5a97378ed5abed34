//! Named definitions that life modules and build plans refer to.

use std::collections::BTreeMap;

use chargen_core::{
    FixedXp, FixedXpOption, LifeModule, LifeStage, Skill, SkillBase, Trait, TraitBase,
};

use crate::specs::{FixedXpSpec, LifeModuleSpec, OptionSpec};

/// Trait and skill definitions by name, plus resolved life modules.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    traits: BTreeMap<String, TraitBase>,
    skills: BTreeMap<String, SkillBase>,
    life_modules: Vec<LifeModule>,
}

impl Catalog {
    /// Builds a catalog from definitions. Later definitions replace earlier
    /// ones with the same name.
    pub fn new(
        traits: impl IntoIterator<Item = TraitBase>,
        skills: impl IntoIterator<Item = SkillBase>,
    ) -> Self {
        Self {
            traits: traits.into_iter().map(|t| (t.name.clone(), t)).collect(),
            skills: skills
                .into_iter()
                .map(|s| (s.name().to_owned(), s))
                .collect(),
            life_modules: Vec::new(),
        }
    }

    pub fn trait_base(&self, name: &str) -> anyhow::Result<&TraitBase> {
        self.traits
            .get(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown trait '{}'", name))
    }

    pub fn skill_base(&self, name: &str) -> anyhow::Result<&SkillBase> {
        self.skills
            .get(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown skill '{}'", name))
    }

    /// A fresh trait instance of the named definition.
    pub fn new_trait(
        &self,
        name: &str,
        sub_name: Option<&str>,
        subject: Option<&str>,
    ) -> anyhow::Result<Trait> {
        let mut t = Trait::new(self.trait_base(name)?.clone());
        t.sub_name = sub_name.map(str::to_owned);
        t.subject = subject.map(str::to_owned);
        Ok(t)
    }

    /// A fresh skill instance of the named definition.
    pub fn new_skill(
        &self,
        name: &str,
        sub_name: Option<&str>,
        specialty: Option<&str>,
    ) -> anyhow::Result<Skill> {
        let mut skill = Skill::new(self.skill_base(name)?.clone());
        skill.sub_name = sub_name.map(str::to_owned);
        skill.specialty = specialty.map(str::to_owned);
        Ok(skill)
    }

    pub fn traits(&self) -> impl Iterator<Item = &TraitBase> + '_ {
        self.traits.values()
    }

    pub fn skills(&self) -> impl Iterator<Item = &SkillBase> + '_ {
        self.skills.values()
    }

    pub fn life_modules(&self) -> &[LifeModule] {
        &self.life_modules
    }

    /// The life module defined for `stage` under `name`.
    pub fn life_module(&self, stage: LifeStage, name: &str) -> anyhow::Result<&LifeModule> {
        self.life_modules
            .iter()
            .find(|module| module.stage == stage && module.name == name)
            .ok_or_else(|| anyhow::anyhow!("Unknown {} life module '{}'", stage, name))
    }

    /// Resolves specs against the catalog's traits and skills and adds the
    /// resulting modules.
    pub fn add_life_modules(
        &mut self,
        specs: impl IntoIterator<Item = LifeModuleSpec>,
    ) -> anyhow::Result<()> {
        for spec in specs {
            let module = self.resolve_life_module(spec)?;
            self.life_modules.push(module);
        }
        Ok(())
    }

    pub fn resolve_life_module(&self, spec: LifeModuleSpec) -> anyhow::Result<LifeModule> {
        let fixed_xps = spec
            .fixed_xps
            .iter()
            .map(|fixed| self.resolve_fixed_xp(fixed))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| anyhow::anyhow!("Life module '{}': {}", spec.name, e))?;

        let mut module = LifeModule::new(spec.stage, spec.name)
            .with_rules(spec.rules)
            .with_fixed_xps(fixed_xps);
        module.is_clan = spec.clan;
        module.fields = spec.fields;
        Ok(module)
    }

    fn resolve_fixed_xp(&self, spec: &FixedXpSpec) -> anyhow::Result<FixedXp> {
        let options = spec
            .options
            .iter()
            .map(|option| self.resolve_option(option))
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(FixedXp::new(spec.choices, options, spec.xp))
    }

    pub fn resolve_option(&self, spec: &OptionSpec) -> anyhow::Result<FixedXpOption> {
        let option = match spec {
            OptionSpec::Attribute { attribute } => FixedXpOption::Attribute(*attribute),
            OptionSpec::Skill {
                name,
                sub_name,
                specialty,
            } => self
                .new_skill(name, sub_name.as_deref(), specialty.as_deref())?
                .into(),
            OptionSpec::Trait {
                name,
                sub_name,
                subject,
            } => self
                .new_trait(name, sub_name.as_deref(), subject.as_deref())?
                .into(),
        };
        Ok(option)
    }
}
