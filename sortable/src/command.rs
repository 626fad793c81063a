use crate::error::SortableError;
use crate::{NodeId, Sortable, SortableOptions};

/// A control request for one or more containers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Init(SortableOptions),
    Enable,
    Disable,
    Destroy,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Init(_) => "init",
            Self::Enable => "enable",
            Self::Disable => "disable",
            Self::Destroy => "destroy",
        }
    }
}

impl Sortable {
    /// Applies `command` to every element of `targets`, in order.
    ///
    /// Stops at the first failing target; earlier targets keep their changes.
    pub fn run(&mut self, targets: &[NodeId], command: Command) -> Result<(), SortableError> {
        strace!(command = command.name(), targets = targets.len(), "Sortable::run");
        for &target in targets {
            match &command {
                Command::Init(options) => {
                    self.init(target, options.clone())?;
                }
                Command::Enable => self.enable(target)?,
                Command::Disable => self.disable(target)?,
                Command::Destroy => self.destroy(target)?,
            }
        }
        Ok(())
    }
}
