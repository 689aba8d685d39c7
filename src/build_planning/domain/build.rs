use super::component::{Component, Price};
use super::slot::Slot;

/// The in-progress configuration: one optional component per slot.
///
/// Every slot is always present; an unselected slot is `None`. Write operations
/// return a new `Build` and leave `self` untouched. Callers are responsible for
/// only putting a component into the slot of the category it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Build {
    cpu: Option<Component>,
    gpu: Option<Component>,
    motherboard: Option<Component>,
    ram: Option<Component>,
    storage: Option<Component>,
    psu: Option<Component>,
    case: Option<Component>,
    cooling: Option<Component>,
}

impl Build {
    /// A build with all eight slots unselected
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: Slot) -> Option<&Component> {
        self.slot_ref(slot).as_ref()
    }

    /// Returns a copy with `slot` holding `component`, replacing any prior selection
    pub fn select(&self, slot: Slot, component: Component) -> Build {
        let mut next = self.clone();
        *next.slot_mut(slot) = Some(component);
        next
    }

    /// Returns a copy with `slot` unselected
    pub fn clear(&self, slot: Slot) -> Build {
        let mut next = self.clone();
        *next.slot_mut(slot) = None;
        next
    }

    /// Returns a build with every slot unselected, regardless of `self`
    pub fn reset_all(&self) -> Build {
        Build::new()
    }

    /// Sum of the selected components' prices; unselected slots count as zero
    pub fn total(&self) -> Price {
        self.slots()
            .filter_map(|(_, component)| component)
            .map(Component::price)
            .sum()
    }

    /// Every slot with its optional selection, in `Slot::ALL` order
    pub fn slots(&self) -> impl Iterator<Item = (Slot, Option<&Component>)> + '_ {
        Slot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }

    pub fn selected_count(&self) -> usize {
        self.slots().filter(|(_, c)| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.selected_count() == 0
    }

    pub fn is_complete(&self) -> bool {
        self.selected_count() == Slot::ALL.len()
    }

    fn slot_ref(&self, slot: Slot) -> &Option<Component> {
        match slot {
            Slot::Cpu => &self.cpu,
            Slot::Gpu => &self.gpu,
            Slot::Motherboard => &self.motherboard,
            Slot::Ram => &self.ram,
            Slot::Storage => &self.storage,
            Slot::Psu => &self.psu,
            Slot::Case => &self.case,
            Slot::Cooling => &self.cooling,
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<Component> {
        match slot {
            Slot::Cpu => &mut self.cpu,
            Slot::Gpu => &mut self.gpu,
            Slot::Motherboard => &mut self.motherboard,
            Slot::Ram => &mut self.ram,
            Slot::Storage => &mut self.storage,
            Slot::Psu => &mut self.psu,
            Slot::Case => &mut self.case,
            Slot::Cooling => &mut self.cooling,
        }
    }
}
