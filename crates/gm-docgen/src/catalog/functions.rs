use super::types::*;
use super::{FunctionCategory, FunctionDoc};

use FunctionCategory::{Basic, LinearAlgebra, RayTracing};

struct FunctionRow {
    name: &'static str,
    category: FunctionCategory,
    file: &'static str,
    templates: &'static [&'static str],
    types: fn() -> Vec<TypeDoc>,
}

fn untyped() -> Vec<TypeDoc> {
    Vec::new()
}

const FUNCTIONS: &[FunctionRow] = &[
    FunctionRow {
        name: "floor",
        category: Basic,
        file: "functions/basic/rounding.rs",
        templates: &["floor(value: {T}) -> {T}"],
        types: floats,
    },
    FunctionRow {
        name: "ceil",
        category: Basic,
        file: "functions/basic/rounding.rs",
        templates: &["ceil(value: {T}) -> {T}"],
        types: floats,
    },
    FunctionRow {
        name: "abs",
        category: Basic,
        file: "functions/basic/rounding.rs",
        templates: &["abs(value: {T}) -> {T}"],
        types: floats,
    },
    FunctionRow {
        name: "min",
        category: Basic,
        file: "functions/basic/compare.rs",
        templates: &["min(value_a: {T}, value_b: {T}) -> {T}"],
        types: comparables,
    },
    FunctionRow {
        name: "max",
        category: Basic,
        file: "functions/basic/compare.rs",
        templates: &["max(value_a: {T}, value_b: {T}) -> {T}"],
        types: comparables,
    },
    FunctionRow {
        name: "clamp",
        category: Basic,
        file: "functions/basic/compare.rs",
        templates: &["clamp(value: {T}, range: &Range<{E}>) -> {T}"],
        types: numerics,
    },
    FunctionRow {
        name: "degrees",
        category: Basic,
        file: "functions/basic/angle.rs",
        templates: &["degrees(angle: {T}) -> {T}"],
        types: float_scalars,
    },
    FunctionRow {
        name: "radians",
        category: Basic,
        file: "functions/basic/angle.rs",
        templates: &["radians(angle: {T}) -> {T}"],
        types: float_scalars,
    },
    FunctionRow {
        name: "quadratic_roots",
        category: Basic,
        file: "functions/basic/quadratic.rs",
        templates: &["quadratic_roots(a: {T}, b: {T}, c: {T}) -> Roots<{T}>"],
        types: float_scalars,
    },
    FunctionRow {
        name: "random_number",
        category: Basic,
        file: "functions/basic/random.rs",
        templates: &["random_number(range: &{R}) -> {T}"],
        types: scalars,
    },
    FunctionRow {
        name: "random_number_with",
        category: Basic,
        file: "functions/basic/random.rs",
        templates: &["random_number_with(range: &{R}, rng: &mut impl RngCore) -> {T}"],
        types: scalars,
    },
    FunctionRow {
        name: "seed",
        category: Basic,
        file: "functions/basic/random.rs",
        templates: &["seed(seed: u64)"],
        types: untyped,
    },
    FunctionRow {
        name: "linear_interpolation",
        category: Basic,
        file: "functions/basic/interpolation.rs",
        templates: &["linear_interpolation(source: {T}, target: {T}, weight: {E}) -> {T}"],
        types: floats,
    },
    FunctionRow {
        name: "bilinear_interpolation",
        category: Basic,
        file: "functions/basic/interpolation.rs",
        templates: &["bilinear_interpolation(corner00: {T}, corner10: {T}, corner01: {T}, \
                      corner11: {T}, weight: Vec2{S}) -> {T}"],
        types: floats,
    },
    FunctionRow {
        name: "trilinear_interpolation",
        category: Basic,
        file: "functions/basic/interpolation.rs",
        templates: &["trilinear_interpolation(corner000: {T}, corner100: {T}, corner010: {T}, \
                      corner110: {T}, corner001: {T}, corner101: {T}, corner011: {T}, \
                      corner111: {T}, weight: Vec3{S}) -> {T}"],
        types: floats,
    },
    FunctionRow {
        name: "linear_map",
        category: Basic,
        file: "functions/basic/interpolation.rs",
        templates: &["linear_map(value: {T}, source_range: &Range<{E}>, \
                      target_range: &Range<{E}>) -> {T}"],
        types: floats,
    },
    FunctionRow {
        name: "content",
        category: Basic,
        file: "functions/basic/range.rs",
        templates: &["content(range: &{R}) -> {E}"],
        types: ranged,
    },
    FunctionRow {
        name: "intersection",
        category: Basic,
        file: "functions/basic/range.rs",
        templates: &["intersection(range_a: &{R}, range_b: &{R}) -> {R}"],
        types: ranged,
    },
    FunctionRow {
        name: "expand",
        category: Basic,
        file: "functions/basic/range.rs",
        templates: &[
            "expand(range: &{R}, rhs: &{T}) -> {R}",
            "expand(range: &{R}, rhs: &{R}) -> {R}",
        ],
        types: ranged,
    },
    FunctionRow {
        name: "contains",
        category: Basic,
        file: "functions/basic/range.rs",
        templates: &[
            "contains(container: &{R}, containee: &{T}) -> bool",
            "contains(container: &{R}, containee: &{R}) -> bool",
        ],
        types: ranged,
    },
    FunctionRow {
        name: "longest_axis",
        category: Basic,
        file: "functions/basic/range.rs",
        templates: &["longest_axis(range: &{R}) -> usize"],
        types: vectors,
    },
    FunctionRow {
        name: "dot_product",
        category: LinearAlgebra,
        file: "functions/linear_algebra/vector.rs",
        templates: &["dot_product(lhs: {T}, rhs: {T}) -> {E}"],
        types: vectors,
    },
    FunctionRow {
        name: "length_squared",
        category: LinearAlgebra,
        file: "functions/linear_algebra/vector.rs",
        templates: &["length_squared(vector: {T}) -> {E}"],
        types: vectors,
    },
    FunctionRow {
        name: "length",
        category: LinearAlgebra,
        file: "functions/linear_algebra/vector.rs",
        templates: &["length(vector: {T}) -> {E}"],
        types: float_vectors,
    },
    FunctionRow {
        name: "normalize",
        category: LinearAlgebra,
        file: "functions/linear_algebra/vector.rs",
        templates: &["normalize(vector: {T}) -> {T}"],
        types: float_vectors,
    },
    FunctionRow {
        name: "distance",
        category: LinearAlgebra,
        file: "functions/linear_algebra/vector.rs",
        templates: &["distance(point_a: {T}, point_b: {T}) -> {E}"],
        types: float_vectors,
    },
    FunctionRow {
        name: "cross_product",
        category: LinearAlgebra,
        file: "functions/linear_algebra/vector.rs",
        templates: &["cross_product(lhs: {T}, rhs: {T}) -> {T}"],
        types: vec3s,
    },
    FunctionRow {
        name: "coordinate_system",
        category: LinearAlgebra,
        file: "functions/linear_algebra/vector.rs",
        templates: &["coordinate_system(vector: {T}) -> ({T}, {T})"],
        types: float_vec3s,
    },
    FunctionRow {
        name: "face_forward",
        category: LinearAlgebra,
        file: "functions/linear_algebra/vector.rs",
        templates: &["face_forward(normal: {T}, guide: {T}) -> {T}"],
        types: vec3s,
    },
    FunctionRow {
        name: "set_identity",
        category: LinearAlgebra,
        file: "functions/linear_algebra/matrix.rs",
        templates: &["set_identity(matrix: &mut {T})"],
        types: matrices,
    },
    FunctionRow {
        name: "is_identity",
        category: LinearAlgebra,
        file: "functions/linear_algebra/matrix.rs",
        templates: &["is_identity(matrix: &{T}) -> bool"],
        types: matrices,
    },
    FunctionRow {
        name: "has_scale",
        category: LinearAlgebra,
        file: "functions/linear_algebra/matrix.rs",
        templates: &["has_scale(matrix: &{T}) -> bool"],
        types: matrices,
    },
    FunctionRow {
        name: "transpose",
        category: LinearAlgebra,
        file: "functions/linear_algebra/matrix.rs",
        templates: &["transpose(matrix: &{T}) -> {T}"],
        types: matrices,
    },
    FunctionRow {
        name: "matrix_product",
        category: LinearAlgebra,
        file: "functions/linear_algebra/matrix.rs",
        templates: &["matrix_product(lhs: &{T}, rhs: &{T}) -> {T}"],
        types: matrices,
    },
    FunctionRow {
        name: "set_translate",
        category: LinearAlgebra,
        file: "functions/linear_algebra/transform.rs",
        templates: &["set_translate(vector: {V}, matrix: &mut {T})"],
        types: matrices,
    },
    FunctionRow {
        name: "set_scale",
        category: LinearAlgebra,
        file: "functions/linear_algebra/transform.rs",
        templates: &["set_scale(vector: {V}, matrix: &mut {T})"],
        types: matrices,
    },
    FunctionRow {
        name: "transform_vector",
        category: LinearAlgebra,
        file: "functions/linear_algebra/transform.rs",
        templates: &["transform_vector(matrix: &{T}, vector: {V}) -> {V}"],
        types: matrices,
    },
    FunctionRow {
        name: "set_rotate_x",
        category: LinearAlgebra,
        file: "functions/linear_algebra/transform.rs",
        templates: &["set_rotate_x(angle: {E}, matrix: &mut {T})"],
        types: mat4s,
    },
    FunctionRow {
        name: "set_rotate_y",
        category: LinearAlgebra,
        file: "functions/linear_algebra/transform.rs",
        templates: &["set_rotate_y(angle: {E}, matrix: &mut {T})"],
        types: mat4s,
    },
    FunctionRow {
        name: "set_rotate_z",
        category: LinearAlgebra,
        file: "functions/linear_algebra/transform.rs",
        templates: &["set_rotate_z(angle: {E}, matrix: &mut {T})"],
        types: mat4s,
    },
    FunctionRow {
        name: "set_rotate",
        category: LinearAlgebra,
        file: "functions/linear_algebra/transform.rs",
        templates: &["set_rotate(angle: {E}, axis: {V}, matrix: &mut {T})"],
        types: mat4s,
    },
    FunctionRow {
        name: "transform_point",
        category: LinearAlgebra,
        file: "functions/linear_algebra/transform.rs",
        templates: &["transform_point(matrix: &{T}, point: {V}) -> {V}"],
        types: mat4s,
    },
    FunctionRow {
        name: "transform_aabb",
        category: LinearAlgebra,
        file: "functions/linear_algebra/transform.rs",
        templates: &["transform_aabb(matrix: &{T}, aabb: &{V}Range) -> {V}Range"],
        types: mat4s,
    },
    FunctionRow {
        name: "inverse",
        category: LinearAlgebra,
        file: "functions/linear_algebra/inverse.rs",
        templates: &["inverse(matrix: &{T}) -> Result<{T}, LinalgError>"],
        types: matrices,
    },
    FunctionRow {
        name: "look_at",
        category: LinearAlgebra,
        file: "functions/linear_algebra/projection.rs",
        templates: &["look_at(position: {V}, look: {V}, up: {V}) -> {T}"],
        types: mat4s,
    },
    FunctionRow {
        name: "orthographic_projection",
        category: LinearAlgebra,
        file: "functions/linear_algebra/projection.rs",
        templates: &["orthographic_projection(left: {E}, right: {E}, bottom: {E}, top: {E}, \
                      near: {E}, far: {E}) -> {T}"],
        types: mat4s,
    },
    FunctionRow {
        name: "perspective_projection",
        category: LinearAlgebra,
        file: "functions/linear_algebra/projection.rs",
        templates: &["perspective_projection(left: {E}, right: {E}, bottom: {E}, top: {E}, \
                      near: {E}, far: {E}) -> {T}"],
        types: mat4s,
    },
    FunctionRow {
        name: "perspective_projection_fov",
        category: LinearAlgebra,
        file: "functions/linear_algebra/projection.rs",
        templates: &["perspective_projection_fov(vertical_fov: {E}, aspect_ratio: {E}, \
                      near: {E}, far: {E}) -> {T}"],
        types: mat4s,
    },
    FunctionRow {
        name: "viewport_transform",
        category: LinearAlgebra,
        file: "functions/linear_algebra/projection.rs",
        templates: &["viewport_transform(dimensions: Vec2{S}, offset: Vec2{S}) -> {T}"],
        types: mat4s,
    },
    FunctionRow {
        name: "ray_position",
        category: RayTracing,
        file: "functions/ray_tracing/position.rs",
        templates: &["ray_position(origin: {T}, direction: {T}, magnitude: {E}) -> {T}"],
        types: float_vectors,
    },
    FunctionRow {
        name: "ray_sphere_intersection",
        category: RayTracing,
        file: "functions/ray_tracing/sphere.rs",
        templates: &["ray_sphere_intersection(sphere_origin: {T}, sphere_radius: {E}, \
                      ray_origin: {T}, ray_direction: {T}) -> Roots<{E}>"],
        types: float_vec3s,
    },
    FunctionRow {
        name: "ray_aabb_intersection",
        category: RayTracing,
        file: "functions/ray_tracing/aabb.rs",
        templates: &["ray_aabb_intersection(ray_origin: {T}, ray_direction: {T}, \
                      aabb: &{R}) -> Option<Range<{E}>>"],
        types: float_vectors,
    },
];

/// Types having a range counterpart.
fn ranged() -> Vec<TypeDoc> {
    [float_scalars(), vec![int_scalars().remove(0)], vectors()]
        .concat()
        .into_iter()
        .filter(|ty| ty.suffix != "d" || ty.name == "f64")
        .collect()
}

/// The documented free functions, with one overload per supported type.
pub fn functions() -> Vec<FunctionDoc> {
    FUNCTIONS
        .iter()
        .map(|row| {
            let types = (row.types)();
            let overloads = if types.is_empty() {
                row.templates.iter().map(|template| template.to_string()).collect()
            } else {
                types
                    .iter()
                    .flat_map(|ty| row.templates.iter().map(|template| ty.render(template)))
                    .collect()
            };
            FunctionDoc::new(row.name.to_string(), row.category, row.file.to_string(), overloads)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expand_overloads_per_type() {
        let functions = functions();
        let min = functions.iter().find(|function| function.name == "min").unwrap();

        assert_eq!(min.category, Basic);
        assert_eq!(min.overloads.len(), numerics().len() + 1);
        assert!(min
            .overloads
            .contains(&"min(value_a: Mat4d, value_b: Mat4d) -> Mat4d".to_string()));
    }

    #[test]
    fn should_compare_booleans() {
        let functions = functions();

        for name in ["min", "max"] {
            let function = functions.iter().find(|function| function.name == name).unwrap();
            assert!(function
                .overloads
                .contains(&format!("{name}(value_a: bool, value_b: bool) -> bool")));
        }

        let clamp = functions.iter().find(|function| function.name == "clamp").unwrap();
        assert!(!clamp.overloads.iter().any(|overload| overload.contains("bool")));
    }

    #[test]
    fn should_keep_untyped_functions() {
        let functions = functions();
        let seed = functions.iter().find(|function| function.name == "seed").unwrap();
        assert_eq!(seed.overloads, ["seed(seed: u64)"]);
    }

    #[test]
    fn should_render_every_placeholder() {
        for function in functions() {
            assert!(!function.overloads.is_empty(), "{}", function.name);
            for overload in &function.overloads {
                assert!(!overload.contains('{'), "{overload}");
                assert!(overload.starts_with(&function.name), "{overload}");
            }
        }
    }

    #[test]
    fn should_only_list_existing_ranges() {
        let ranges: Vec<_> = ranged().into_iter().map(|ty| ty.range).collect();
        assert_eq!(
            ranges,
            [
                "FloatRange",
                "DoubleRange",
                "IntRange",
                "Vec2fRange",
                "Vec3fRange",
                "Vec4fRange",
                "Vec2iRange",
                "Vec3iRange",
                "Vec4iRange"
            ]
        );
    }

    #[test]
    fn should_place_ray_functions_in_ray_tracing() {
        let functions = functions();
        let ray_functions: Vec<_> = functions
            .iter()
            .filter(|function| function.category == RayTracing)
            .map(|function| function.name.as_str())
            .collect();

        assert_eq!(
            ray_functions,
            ["ray_position", "ray_sphere_intersection", "ray_aabb_intersection"]
        );
    }
}
