use super::scroll::ScrollPosition;

pub type SectionId = &'static str;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    pub id: SectionId,
    pub label: &'static str,
}

/// Page sections in the order they are laid out.
pub const SECTIONS: [SectionSpec; 9] = [
    SectionSpec { id: "hero", label: "Home" },
    SectionSpec { id: "about", label: "About" },
    SectionSpec { id: "skills", label: "Skills" },
    SectionSpec { id: "projects", label: "Projects" },
    SectionSpec { id: "experience", label: "Experience" },
    SectionSpec { id: "resume", label: "Resume" },
    SectionSpec { id: "certifications", label: "Certifications" },
    SectionSpec { id: "testimonials", label: "Testimonials" },
    SectionSpec { id: "contact", label: "Contact" },
];

/// A measured section: `[start_offset, end_offset)` in page coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: SectionId,
    pub label: &'static str,
    pub start_offset: f64,
    pub end_offset: f64,
}

impl Section {
    pub fn contains(&self, probe: f64) -> bool {
        probe >= self.start_offset && probe < self.end_offset
    }
}

/// Maps a scroll position to exactly one active section.
///
/// Shared by the desktop navigation bar and the mobile menu so both highlight
/// the same entry.
#[derive(Debug, Clone)]
pub struct SectionResolver {
    specs: Vec<SectionSpec>,
    sections: Vec<Section>,
    active: SectionId,
}

impl SectionResolver {
    pub fn new(specs: &[SectionSpec]) -> Self {
        let active = specs.first().map(|s| s.id).unwrap_or_default();
        Self {
            specs: specs.to_vec(),
            sections: Vec::new(),
            active,
        }
    }

    /// Re-reads section boundaries. `layout` returns `(top, height)` for a rendered
    /// section, or `None` when the section has no element; those are skipped.
    pub fn measure<F>(&mut self, mut layout: F)
    where
        F: FnMut(SectionId) -> Option<(f64, f64)>,
    {
        self.sections = self
            .specs
            .iter()
            .filter_map(|spec| match layout(spec.id) {
                Some((top, height)) => Some(Section {
                    id: spec.id,
                    label: spec.label,
                    start_offset: top,
                    end_offset: top + height,
                }),
                None => {
                    log::debug!("section '{}' has no layout, skipping", spec.id);
                    None
                }
            })
            .collect();
    }

    /// Recomputes the active section. When nothing contains the probe (stale
    /// boundaries, or scrolled past the end) the previous section stays active.
    pub fn resolve(&mut self, position: ScrollPosition) -> SectionId {
        let probe = position.probe();
        if let Some(section) = self.sections.iter().find(|s| s.contains(probe)) {
            self.active = section.id;
        }
        self.active
    }

    /// Re-reads the layout, then resolves against it. Content that changes
    /// height after mount (filters, late images) moves every later boundary.
    pub fn refresh<F>(&mut self, layout: F, position: ScrollPosition) -> SectionId
    where
        F: FnMut(SectionId) -> Option<(f64, f64)>,
    {
        self.measure(layout);
        self.resolve(position)
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn specs(&self) -> &[SectionSpec] {
        &self.specs
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 9 contiguous sections of 1000px each
    fn contiguous_layout(id: SectionId) -> Option<(f64, f64)> {
        SECTIONS
            .iter()
            .position(|s| s.id == id)
            .map(|i| (i as f64 * 1000.0, 1000.0))
    }

    fn at(offset: f64) -> ScrollPosition {
        ScrollPosition::new(Some(offset), Some(900.0))
    }

    #[test]
    fn test_starts_on_first_section() {
        let resolver = SectionResolver::new(&SECTIONS);
        assert_eq!(resolver.active(), "hero");
    }

    #[test]
    fn test_resolves_section_under_probe() {
        let mut resolver = SectionResolver::new(&SECTIONS);
        resolver.measure(contiguous_layout);

        // probe = offset + 300
        assert_eq!(resolver.resolve(at(0.0)), "hero");
        assert_eq!(resolver.resolve(at(699.0)), "hero");
        assert_eq!(resolver.resolve(at(700.0)), "about");
        assert_eq!(resolver.resolve(at(2800.0)), "projects");
        assert_eq!(resolver.resolve(at(8600.0)), "contact");
    }

    #[test]
    fn test_active_section_is_monotonic_in_offset() {
        let mut resolver = SectionResolver::new(&SECTIONS);
        resolver.measure(contiguous_layout);

        let order = |id: SectionId| SECTIONS.iter().position(|s| s.id == id).unwrap();
        let mut last = 0;
        let mut offset = 0.0;
        while offset <= 9000.0 {
            let id = resolver.resolve(at(offset));
            let idx = order(id);
            assert!(idx >= last, "went back from {last} to {idx} at {offset}");
            last = idx;
            offset += 37.0;
        }
        assert_eq!(resolver.active(), "contact");
    }

    #[test]
    fn test_keeps_previous_section_when_probe_is_outside_every_range() {
        let mut resolver = SectionResolver::new(&SECTIONS);
        resolver.measure(contiguous_layout);
        assert_eq!(resolver.resolve(at(4200.0)), "experience");

        // beyond the last boundary
        assert_eq!(resolver.resolve(at(20_000.0)), "experience");
    }

    #[test]
    fn test_skips_sections_without_layout() {
        let mut resolver = SectionResolver::new(&SECTIONS);
        resolver.measure(|id| if id == "skills" { None } else { contiguous_layout(id) });

        assert_eq!(resolver.sections().len(), SECTIONS.len() - 1);
        assert!(resolver.sections().iter().all(|s| s.id != "skills"));

        assert_eq!(resolver.resolve(at(1500.0)), "about");
        // probe lands in the gap left by "skills"
        assert_eq!(resolver.resolve(at(2000.0)), "about");
        assert_eq!(resolver.resolve(at(2800.0)), "projects");
    }

    #[test]
    fn test_remeasure_after_resize() {
        let mut resolver = SectionResolver::new(&SECTIONS);
        resolver.measure(contiguous_layout);
        assert_eq!(resolver.resolve(at(1200.0)), "about");

        // sections grow to 2000px each
        resolver.measure(|id| contiguous_layout(id).map(|(top, h)| (top * 2.0, h * 2.0)));
        assert_eq!(resolver.resolve(at(1200.0)), "hero");
    }

    #[test]
    fn test_refresh_follows_content_that_shrinks() {
        // "projects" collapses to 200px after a filter change
        let shrunk = |id: SectionId| {
            let i = SECTIONS.iter().position(|s| s.id == id)?;
            let projects = SECTIONS.iter().position(|s| s.id == "projects")?;
            let top = match i.cmp(&projects) {
                std::cmp::Ordering::Greater => i as f64 * 1000.0 - 800.0,
                _ => i as f64 * 1000.0,
            };
            let height = if i == projects { 200.0 } else { 1000.0 };
            Some((top, height))
        };

        let mut stale = SectionResolver::new(&SECTIONS);
        stale.measure(contiguous_layout);
        assert_eq!(stale.resolve(at(5200.0)), "resume");

        let mut resolver = SectionResolver::new(&SECTIONS);
        resolver.measure(contiguous_layout);
        assert_eq!(resolver.refresh(shrunk, at(5200.0)), "certifications");
        assert_eq!(resolver.refresh(shrunk, at(3000.0)), "experience");
    }
}
