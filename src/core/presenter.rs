use crate::core::assembler::Assembler;
use crate::core::catalog::Catalog;
use crate::domain::model::{BaseKind, DecoratorKind, Rendering};
use crate::utils::error::{DemoError, Result};

/// Holds the user's current base and decorator order.
///
/// Every interaction rebuilds the whole chain from the base outward and hands
/// back the fresh rendering. Nothing is cached between interactions.
#[derive(Debug, Clone)]
pub struct Presenter {
    assembler: Assembler,
    base: BaseKind,
    selection: Vec<DecoratorKind>,
}

impl Presenter {
    pub fn new(base: BaseKind) -> Self {
        Self::with_catalog(base, Catalog::default())
    }

    pub fn with_catalog(base: BaseKind, catalog: Catalog) -> Self {
        Self {
            assembler: Assembler::new(catalog),
            base,
            selection: Vec::new(),
        }
    }

    pub fn with_selection(mut self, selection: Vec<DecoratorKind>) -> Self {
        self.selection = selection;
        self
    }

    pub fn base(&self) -> BaseKind {
        self.base
    }

    pub fn selection(&self) -> &[DecoratorKind] {
        &self.selection
    }

    pub fn catalog(&self) -> &Catalog {
        self.assembler.catalog()
    }

    pub fn render(&self) -> Rendering {
        self.assembler.render(self.base, &self.selection)
    }

    /// Enables `kind` if it is off; otherwise removes every copy of it.
    pub fn toggle(&mut self, kind: DecoratorKind) -> Rendering {
        if self.selection.contains(&kind) {
            self.selection.retain(|k| *k != kind);
            tracing::debug!("Toggled off {}", kind);
        } else {
            self.selection.push(kind);
            tracing::debug!("Toggled on {}", kind);
        }
        self.render()
    }

    pub fn add(&mut self, kind: DecoratorKind) -> Rendering {
        self.selection.push(kind);
        tracing::debug!("Added {} at position {}", kind, self.selection.len() - 1);
        self.render()
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Rendering> {
        self.check_position(index)?;
        let removed = self.selection.remove(index);
        tracing::debug!("Removed {} from position {}", removed, index);
        Ok(self.render())
    }

    /// Moves the layer at `from` so that it ends up at position `to`.
    pub fn move_layer(&mut self, from: usize, to: usize) -> Result<Rendering> {
        self.check_position(from)?;
        self.check_position(to)?;
        let kind = self.selection.remove(from);
        self.selection.insert(to, kind);
        tracing::debug!("Moved {} from {} to {}", kind, from, to);
        Ok(self.render())
    }

    pub fn set_base(&mut self, base: BaseKind) -> Rendering {
        self.base = base;
        tracing::debug!("Base set to {}", base);
        self.render()
    }

    pub fn clear(&mut self) -> Rendering {
        self.selection.clear();
        self.render()
    }

    fn check_position(&self, index: usize) -> Result<()> {
        if index >= self.selection.len() {
            return Err(DemoError::InvalidPosition {
                index,
                len: self.selection.len(),
            });
        }
        Ok(())
    }
}
