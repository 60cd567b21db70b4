//! Fixed-capacity table of shader slots

use std::fmt;

use crate::geometry::Coordinate;

use super::{Shader, ShaderContext, ShaderState};

/// Number of shader slots available in a `ShaderRegistry`
pub const MAX_SHADERS: usize = 10;

/// Table of `MAX_SHADERS` shader slots with a cursor selecting the active one.
///
/// Installing a shader or state always targets the active slot, so select a slot first.
/// Slots are never removed, only overwritten.
pub struct ShaderRegistry<B> {
    shaders: [Option<Box<dyn Shader<B>>>; MAX_SHADERS],
    states: [ShaderState; MAX_SHADERS],
    active: usize,
}

impl<B> ShaderRegistry<B> {
    /// Create a registry with every slot empty and slot `0` active
    pub fn new() -> ShaderRegistry<B> {
        ShaderRegistry {
            shaders: Default::default(),
            states: [ShaderState::default(); MAX_SHADERS],
            active: 0,
        }
    }

    /// Number of slots
    #[inline(always)]
    pub fn capacity(&self) -> usize { MAX_SHADERS }

    /// Index of the active slot
    #[inline]
    pub fn active_index(&self) -> usize { self.active }

    /// Make slot `index` the active slot.
    ///
    /// Indices outside of the table are ignored and the active slot stays as it was.
    pub fn select(&mut self, index: usize) {
        if index >= MAX_SHADERS {
            debug!("Ignoring selection of shader slot {}, only {} slots exist", index, MAX_SHADERS);
            return;
        }

        self.active = index;
    }

    /// Install `shader` into the active slot, replacing whatever was there
    pub fn set_shader<S>(&mut self, shader: S) where S: Shader<B> + 'static {
        self.shaders[self.active] = Some(Box::new(shader));
    }

    /// Install a closure into the active slot, replacing whatever was there.
    ///
    /// Same as `set_shader`, but lets the closure's argument types be inferred.
    pub fn set_shader_fn<F>(&mut self, shader: F) where F: FnMut(&mut ShaderContext<B>, Coordinate) + 'static {
        self.set_shader(shader)
    }

    /// Store a copy of `state` in the active slot.
    ///
    /// Only affects draws made after this call.
    #[inline]
    pub fn set_state(&mut self, state: ShaderState) {
        self.states[self.active] = state;
    }

    /// State of the active slot
    #[inline]
    pub fn state(&self) -> &ShaderState {
        &self.states[self.active]
    }

    /// Returns true if the active slot has a shader installed
    #[inline]
    pub fn has_active_shader(&self) -> bool {
        self.shaders[self.active].is_some()
    }

    /// Shader of the active slot, if one was ever installed, along with the slot state
    pub fn active_mut(&mut self) -> (Option<&mut (dyn Shader<B> + 'static)>, &ShaderState) {
        let active = self.active;

        (self.shaders[active].as_mut().map(|shader| &mut **shader), &self.states[active])
    }
}

impl<B> Default for ShaderRegistry<B> {
    fn default() -> ShaderRegistry<B> { ShaderRegistry::new() }
}

impl<B> fmt::Debug for ShaderRegistry<B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let installed: Vec<usize> = self.shaders.iter()
                                                .enumerate()
                                                .filter(|&(_, shader)| shader.is_some())
                                                .map(|(index, _)| index)
                                                .collect();

        f.debug_struct("ShaderRegistry")
         .field("active", &self.active)
         .field("installed", &installed)
         .field("states", &self.states)
         .finish()
    }
}

#[cfg(test)]
mod test {
    use std::rc::Rc;
    use std::cell::RefCell;

    use super::*;

    use crate::color::rgb;
    use crate::framebuffer::NullFramebuffer;
    use crate::time::FrameClock;

    fn run_active(registry: &mut ShaderRegistry<NullFramebuffer>, coord: Coordinate) -> bool {
        let mut target = NullFramebuffer::new();
        let clock = FrameClock::new();

        match registry.active_mut() {
            (Some(shader), state) => {
                let mut ctx = ShaderContext { target: &mut target, state, clock: &clock };
                shader.shade(&mut ctx, coord);
                true
            }
            (None, _) => false,
        }
    }

    #[test]
    fn test_starts_on_slot_zero() {
        let registry = ShaderRegistry::<NullFramebuffer>::new();

        assert_eq!(registry.active_index(), 0);
        assert_eq!(registry.capacity(), MAX_SHADERS);
        assert!(!registry.has_active_shader());
    }

    #[test]
    fn test_out_of_range_selection_is_ignored() {
        let mut registry = ShaderRegistry::<NullFramebuffer>::new();

        registry.select(3);
        registry.select(MAX_SHADERS);
        assert_eq!(registry.active_index(), 3);

        registry.select(usize::max_value());
        assert_eq!(registry.active_index(), 3);

        registry.select(MAX_SHADERS - 1);
        assert_eq!(registry.active_index(), MAX_SHADERS - 1);
    }

    #[test]
    fn test_unset_slot_has_no_shader() {
        let mut registry = ShaderRegistry::<NullFramebuffer>::new();

        assert!(!run_active(&mut registry, Coordinate::new(0, 0)));
    }

    #[test]
    fn test_shaders_are_per_slot() {
        let mut registry = ShaderRegistry::<NullFramebuffer>::new();
        let calls = Rc::new(RefCell::new(Vec::new()));

        for slot in 0..2 {
            let calls = calls.clone();

            registry.select(slot);
            registry.set_shader_fn(move |_, coord| calls.borrow_mut().push((slot, coord)));
        }

        registry.select(0);
        assert!(run_active(&mut registry, Coordinate::new(1, 2)));
        registry.select(1);
        assert!(run_active(&mut registry, Coordinate::new(3, 4)));
        registry.select(2);
        assert!(!run_active(&mut registry, Coordinate::new(5, 6)));

        assert_eq!(*calls.borrow(), vec![(0, Coordinate::new(1, 2)), (1, Coordinate::new(3, 4))]);
    }

    #[test]
    fn test_set_shader_replaces_previous() {
        let mut registry = ShaderRegistry::<NullFramebuffer>::new();
        let calls = Rc::new(RefCell::new(Vec::new()));

        {
            let calls = calls.clone();
            registry.set_shader_fn(move |_, _| calls.borrow_mut().push("first"));
        }
        {
            let calls = calls.clone();
            registry.set_shader_fn(move |_, _| calls.borrow_mut().push("second"));
        }

        run_active(&mut registry, Coordinate::new(0, 0));

        assert_eq!(*calls.borrow(), vec!["second"]);
    }

    #[test]
    fn test_state_follows_cursor() {
        let mut registry = ShaderRegistry::<NullFramebuffer>::new();
        let state = ShaderState::new([rgb(1, 0, 0), rgb(0, 1, 0), rgb(0, 0, 1)], true);

        registry.select(4);
        registry.set_state(state);

        assert_eq!(*registry.state(), state);

        registry.select(5);
        assert_eq!(*registry.state(), ShaderState::default());

        registry.select(4);
        assert!(registry.state().use_color_coords);
    }
}
