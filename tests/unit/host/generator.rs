//! Tests for collider generation through the host capability interface

#[cfg(test)]
mod tests {
    use tilerects::algorithm::cover::OverlapPolicy;
    use tilerects::host::{
        ColliderGenerator, ColliderHost, ContainerHandle, ContainerTarget, GeneratorConfig,
        MemoryHost,
    };
    use tilerects::io::configuration::COLLIDER_CHILD_NAME;
    use tilerects::io::tilemap::parse_text;
    use tilerects::spatial::{CellRect, FlatOccupancy};

    fn generator(target: ContainerTarget, overlap: OverlapPolicy) -> ColliderGenerator {
        ColliderGenerator::new(GeneratorConfig { target, overlap })
    }

    // Tests shapes land on the host object in discovery order
    #[test]
    fn test_generate_on_host_object() {
        let mut host = MemoryHost::new();
        let source = parse_text("#..\n###").unwrap();
        let summary = generator(ContainerTarget::UseHostObject, OverlapPolicy::NotAllowed)
            .generate(&mut host, &source);

        assert_eq!(
            summary.rectangles,
            vec![CellRect::new(0, 0, 3, 1), CellRect::new(0, 1, 1, 1)]
        );
        assert_eq!(host.shapes(ContainerHandle::Host), summary.shapes.as_slice());
        assert_eq!(host.children().count(), 0);
        assert_eq!(summary.claimed_cells(), 4);
    }

    // Tests the child container is created with its fixed name
    #[test]
    fn test_generate_into_child_container() {
        let mut host = MemoryHost::new();
        let source = parse_text("##").unwrap();
        let summary = generator(ContainerTarget::CreateChildContainer, OverlapPolicy::NotAllowed)
            .generate(&mut host, &source);

        let child = host.find_container(COLLIDER_CHILD_NAME).expect("child container");
        assert_eq!(host.shapes(child), summary.shapes.as_slice());
        assert!(host.shapes(ContainerHandle::Host).is_empty());
    }

    // Tests shapes are translated by the source origin
    #[test]
    fn test_generate_applies_origin() {
        let mut host = MemoryHost::new();
        let source = parse_text("##").unwrap().with_origin([10, -4]);
        let summary = ColliderGenerator::default().generate(&mut host, &source);

        assert_eq!(summary.region.x, 10);
        assert_eq!(summary.region.y, -4);
        let shape = summary.shapes.first().copied().expect("one shape");
        assert_eq!(shape.center, [11.0, -3.5]);
        assert_eq!(shape.size, [2.0, 1.0]);
    }

    // Tests regenerating replaces earlier output instead of adding to it
    #[test]
    fn test_regenerate_replaces_previous_output() {
        let mut host = MemoryHost::new();
        let source = parse_text("#.#").unwrap();

        for target in [ContainerTarget::UseHostObject, ContainerTarget::CreateChildContainer] {
            let generator = generator(target, OverlapPolicy::NotAllowed);
            generator.generate(&mut host, &source);
            generator.generate(&mut host, &source);

            assert_eq!(host.shape_count(), 2, "target {target:?}");
            assert!(host.children().count() <= 1);
        }
    }

    // Tests switching targets removes the stale child container
    #[test]
    fn test_switching_target_removes_child() {
        let mut host = MemoryHost::new();
        let source = parse_text("#").unwrap();

        generator(ContainerTarget::CreateChildContainer, OverlapPolicy::NotAllowed)
            .generate(&mut host, &source);
        generator(ContainerTarget::UseHostObject, OverlapPolicy::NotAllowed)
            .generate(&mut host, &source);

        assert_eq!(host.children().count(), 0);
        assert_eq!(host.shapes(ContainerHandle::Host).len(), 1);
    }

    // Tests remove, generate, remove leaves no residual artifacts
    #[test]
    fn test_remove_all_is_idempotent() {
        let mut host = MemoryHost::new();
        let source = parse_text("##\n#.").unwrap();

        for target in [ContainerTarget::UseHostObject, ContainerTarget::CreateChildContainer] {
            let generator = generator(target, OverlapPolicy::Allowed);
            generator.remove_all(&mut host);
            generator.generate(&mut host, &source);
            assert!(!host.is_clean());

            generator.remove_all(&mut host);
            assert!(host.is_clean(), "target {target:?}");
            generator.remove_all(&mut host);
            assert!(host.is_clean());
        }
    }

    // Tests a zero-area region still selects the container but attaches nothing
    #[test]
    fn test_generate_zero_area_region() {
        let mut host = MemoryHost::new();
        let source = FlatOccupancy::new(0, 0, Vec::new()).unwrap();
        let summary = generator(ContainerTarget::CreateChildContainer, OverlapPolicy::NotAllowed)
            .generate(&mut host, &source);

        assert!(summary.rectangles.is_empty());
        assert!(summary.shapes.is_empty());
        assert_eq!(host.children().count(), 1);
        assert_eq!(host.shape_count(), 0);
    }

    // Tests a region with no occupied cells yields an empty result
    #[test]
    fn test_generate_without_tiles() {
        let mut host = MemoryHost::new();
        let source = parse_text("...\n...").unwrap();
        let summary = ColliderGenerator::default().generate(&mut host, &source);

        assert!(summary.rectangles.is_empty());
        assert!(host.is_clean());
    }

    // Tests overlap policy reaches the solver
    #[test]
    fn test_overlap_policy_is_forwarded() {
        let source = parse_text("#..\n###").unwrap();
        let mut host = MemoryHost::new();

        let allowed = generator(ContainerTarget::UseHostObject, OverlapPolicy::Allowed);
        assert_eq!(allowed.config().overlap, OverlapPolicy::Allowed);
        let summary = allowed.generate(&mut host, &source);
        assert_eq!(summary.rectangles.last(), Some(&CellRect::new(0, 0, 1, 2)));
        assert_eq!(summary.claimed_cells(), 5);
    }
}
