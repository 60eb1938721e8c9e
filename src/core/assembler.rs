use crate::core::base::{Coffee, Tea};
use crate::core::catalog::Catalog;
use crate::core::decorators::{Caramel, Large, Milk, Sugar, WhippedCream};
use crate::domain::model::{BaseKind, DecoratorKind, Rendering, Step};
use crate::domain::ports::Component;

/// Builds decorator chains from a base and an ordered selection.
///
/// The first element of the selection sits right around the base; the last
/// one is the outermost wrapper. Building never fails and is deterministic.
#[derive(Debug, Clone, Default)]
pub struct Assembler {
    catalog: Catalog,
}

impl Assembler {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn base(&self, kind: BaseKind) -> Box<dyn Component> {
        let price = self.catalog.base_price(kind);
        match kind {
            BaseKind::Coffee => Box::new(Coffee::with_price(price)),
            BaseKind::Tea => Box::new(Tea::with_price(price)),
        }
    }

    /// Wraps `inner` in one decorator of the given kind.
    pub fn wrap(&self, inner: Box<dyn Component>, kind: DecoratorKind) -> Box<dyn Component> {
        let value = self.catalog.decorator_value(kind);
        match kind {
            DecoratorKind::Milk => Box::new(Milk::with_price(inner, value)),
            DecoratorKind::Sugar => Box::new(Sugar::with_price(inner, value)),
            DecoratorKind::Caramel => Box::new(Caramel::with_price(inner, value)),
            DecoratorKind::WhippedCream => Box::new(WhippedCream::with_price(inner, value)),
            DecoratorKind::Large => Box::new(Large::with_multiplier(inner, value)),
        }
    }

    pub fn assemble(&self, base: BaseKind, selection: &[DecoratorKind]) -> Box<dyn Component> {
        selection
            .iter()
            .fold(self.base(base), |inner, kind| self.wrap(inner, *kind))
    }

    /// Output of every link, base first, as the chain is built outward.
    pub fn trace(&self, base: BaseKind, selection: &[DecoratorKind]) -> Vec<Step> {
        let mut chain = self.base(base);
        let mut steps = Vec::with_capacity(selection.len() + 1);
        steps.push(Step {
            layer: base.name().to_string(),
            description: chain.describe(),
            cost: chain.cost(),
        });

        for kind in selection {
            chain = self.wrap(chain, *kind);
            steps.push(Step {
                layer: kind.name().to_string(),
                description: chain.describe(),
                cost: chain.cost(),
            });
        }

        steps
    }

    pub fn render(&self, base: BaseKind, selection: &[DecoratorKind]) -> Rendering {
        let steps = self.trace(base, selection);
        // trace always yields the base step, so the outermost link is present
        let (description, cost) = steps
            .last()
            .map(|step| (step.description.clone(), step.cost))
            .unwrap_or_default();

        tracing::debug!(
            "Rebuilt chain {} <- [{}]: {} ({})",
            base,
            selection
                .iter()
                .map(|k| k.name())
                .collect::<Vec<_>>()
                .join(", "),
            description,
            cost
        );

        Rendering {
            base,
            layers: selection.to_vec(),
            description,
            cost,
            steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use DecoratorKind as D;

    #[test]
    fn test_empty_selection_is_the_base() {
        let assembler = Assembler::default();
        let chain = assembler.assemble(BaseKind::Coffee, &[]);
        assert_eq!(chain.describe(), "Coffee");
        assert_eq!(chain.cost(), 5);
    }

    #[test]
    fn test_first_selected_is_innermost() {
        let assembler = Assembler::default();
        let chain = assembler.assemble(BaseKind::Tea, &[D::Milk, D::Sugar]);
        assert_eq!(chain.describe(), "Tea + Milk + Sugar");
    }

    #[test]
    fn test_trace_reports_each_layer() {
        let assembler = Assembler::default();
        let steps = assembler.trace(BaseKind::Coffee, &[D::Milk, D::Caramel]);

        let costs: Vec<u64> = steps.iter().map(|s| s.cost).collect();
        assert_eq!(costs, vec![5, 7, 10]);
        assert_eq!(steps[0].layer, "coffee");
        assert_eq!(steps[2].description, "Coffee + Milk + Caramel");
    }

    #[test]
    fn test_render_matches_assemble() {
        let assembler = Assembler::default();
        let selection = [D::Large, D::Milk, D::WhippedCream, D::Milk];
        let chain = assembler.assemble(BaseKind::Coffee, &selection);
        let rendering = assembler.render(BaseKind::Coffee, &selection);

        assert_eq!(rendering.description, chain.describe());
        assert_eq!(rendering.cost, chain.cost());
        assert_eq!(rendering.layers, selection.to_vec());
        assert_eq!(rendering.steps.len(), selection.len() + 1);
    }

    #[test]
    fn test_catalog_prices_flow_into_chain() {
        let catalog = Catalog {
            coffee: 10,
            milk: 1,
            large_multiplier: 3,
            ..Catalog::default()
        };
        let assembler = Assembler::new(catalog);
        assert_eq!(assembler.assemble(BaseKind::Coffee, &[D::Milk, D::Large]).cost(), 33);
    }
}
