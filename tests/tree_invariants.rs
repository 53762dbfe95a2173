use bintree_packer::model::{Placement, Rect};
use bintree_packer::packer::{FixedPacker, GrowingPacker, Packer};
use bintree_packer::tree::RegionTree;
use rand::Rng;

fn random_sizes(count: usize, min: u32, max: u32) -> Vec<(u32, u32)> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| (rng.gen_range(min..=max), rng.gen_range(min..=max)))
        .collect()
}

fn placed_rects(placements: &[Placement<usize>]) -> Vec<Rect> {
    placements.iter().filter_map(|p| p.rect()).collect()
}

fn assert_disjoint(rects: &[Rect]) {
    for i in 0..rects.len() {
        for j in (i + 1)..rects.len() {
            assert!(
                !rects[i].intersects(&rects[j]),
                "overlap between {:?} and {:?}",
                rects[i],
                rects[j]
            );
        }
    }
}

fn assert_contained(rects: &[Rect], root: &Rect) {
    for r in rects {
        assert!(root.contains(r), "{r:?} escapes bin {root:?}");
    }
}

/// At every occupied node, the occupant and the two carved children must
/// exactly tile the node's rectangle. The occupant's extent is implied by
/// the children: width minus the right child's width, height minus the down
/// child's height (this also covers growth wrapper roots, whose implied
/// occupant is empty).
fn assert_partition_conserved(tree: &RegionTree) {
    for (_, node) in tree.regions() {
        if !node.used {
            assert!(node.right.is_none() && node.down.is_none());
            continue;
        }
        let right = tree.node(node.right.expect("occupied node missing right"));
        let down = tree.node(node.down.expect("occupied node missing down"));
        let occupant_w = node.rect.w - right.rect.w;
        let occupant_h = node.rect.h - down.rect.h;
        let occupant_area = (occupant_w as u64) * (occupant_h as u64);
        assert_eq!(
            node.rect.area(),
            occupant_area + right.rect.area() + down.rect.area(),
            "partition leak at {:?}",
            node.rect
        );
    }
}

#[test]
fn fixed_packing_is_disjoint_and_contained() {
    for _ in 0..20 {
        let sizes = random_sizes(60, 4, 48);
        let mut packer = FixedPacker::new(256, 256).unwrap();
        let placements: Vec<_> = sizes
            .iter()
            .enumerate()
            .map(|(i, &(w, h))| packer.pack(i, w, h).unwrap())
            .collect();

        let rects = placed_rects(&placements);
        assert_disjoint(&rects);
        assert_contained(&rects, &packer.tree().root_rect());
        assert_partition_conserved(packer.tree());
    }
}

#[test]
fn growing_packing_is_disjoint_and_contained() {
    for _ in 0..20 {
        let sizes = random_sizes(60, 4, 48);
        let mut packer = GrowingPacker::new();
        let placements: Vec<_> = sizes
            .iter()
            .enumerate()
            .map(|(i, &(w, h))| packer.pack(i, w, h).unwrap())
            .collect();

        let rects = placed_rects(&placements);
        assert_disjoint(&rects);
        assert_contained(&rects, &packer.tree().root_rect());
        assert_partition_conserved(packer.tree());
    }
}

#[test]
fn placed_area_never_exceeds_bin_area() {
    let sizes = random_sizes(80, 2, 32);
    let mut packer = GrowingPacker::new();
    let mut placed_area = 0u64;
    for (i, &(w, h)) in sizes.iter().enumerate() {
        if packer.pack(i, w, h).unwrap().is_placed() {
            placed_area += (w as u64) * (h as u64);
        }
    }
    assert!(placed_area <= packer.tree().root_rect().area());
}
