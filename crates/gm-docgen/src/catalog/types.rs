use gm::{ClassName, Element, Matrix, Range, Vector};

use super::ClassDoc;

/// A concrete type substituted into overload signatures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDoc {
    /// Type name, such as `f32` or `Vec3f`.
    pub name: String,
    /// Element type name.
    pub elem: &'static str,
    /// Suffix of the element type in class names.
    pub suffix: &'static str,
    /// Name of the range over this type, empty for matrices.
    pub range: String,
    /// Name of the vector transformed by this matrix, empty for other types.
    pub homogeneous: String,
}

impl TypeDoc {
    /// Substitutes the placeholders of `template` with this type.
    ///
    /// `{T}` is the type, `{E}` its element, `{S}` the element suffix, `{R}` the range over
    /// the type and `{V}` the vector transformed by a matrix.
    pub fn render(&self, template: &str) -> String {
        template
            .replace("{T}", &self.name)
            .replace("{E}", self.elem)
            .replace("{S}", self.suffix)
            .replace("{R}", &self.range)
            .replace("{V}", &self.homogeneous)
    }
}

fn scalar<E: Element + ClassName>() -> TypeDoc {
    TypeDoc {
        name: core::any::type_name::<E>().to_string(),
        elem: core::any::type_name::<E>(),
        suffix: E::SUFFIX,
        range: Range::<E>::class_name(),
        homogeneous: String::new(),
    }
}

fn boolean() -> TypeDoc {
    TypeDoc {
        name: "bool".to_string(),
        elem: "bool",
        suffix: "",
        range: String::new(),
        homogeneous: String::new(),
    }
}

fn vector<E: Element, const N: usize>() -> TypeDoc {
    TypeDoc {
        name: Vector::<E, N>::class_name(),
        elem: core::any::type_name::<E>(),
        suffix: E::SUFFIX,
        range: Range::<Vector<E, N>>::class_name(),
        homogeneous: String::new(),
    }
}

fn matrix<E: Element, const N: usize>() -> TypeDoc {
    TypeDoc {
        name: Matrix::<E, N>::class_name(),
        elem: core::any::type_name::<E>(),
        suffix: E::SUFFIX,
        range: String::new(),
        homogeneous: format!("Vec{}{}", N - 1, E::SUFFIX),
    }
}

/// Floating point scalars.
pub fn float_scalars() -> Vec<TypeDoc> {
    vec![scalar::<f32>(), scalar::<f64>()]
}

/// Integer scalars.
pub fn int_scalars() -> Vec<TypeDoc> {
    vec![scalar::<i32>(), scalar::<i64>()]
}

/// Vectors of floating point elements.
pub fn float_vectors() -> Vec<TypeDoc> {
    vec![
        vector::<f32, 2>(),
        vector::<f32, 3>(),
        vector::<f32, 4>(),
        vector::<f64, 2>(),
        vector::<f64, 3>(),
        vector::<f64, 4>(),
    ]
}

/// Vectors of integer elements.
pub fn int_vectors() -> Vec<TypeDoc> {
    vec![vector::<i32, 2>(), vector::<i32, 3>(), vector::<i32, 4>()]
}

/// Three dimensional vectors of floating point elements.
pub fn float_vec3s() -> Vec<TypeDoc> {
    vec![vector::<f32, 3>(), vector::<f64, 3>()]
}

/// Every three dimensional vector.
pub fn vec3s() -> Vec<TypeDoc> {
    vec![vector::<f32, 3>(), vector::<f64, 3>(), vector::<i32, 3>()]
}

/// Every matrix.
pub fn matrices() -> Vec<TypeDoc> {
    vec![
        matrix::<f32, 3>(),
        matrix::<f32, 4>(),
        matrix::<f64, 3>(),
        matrix::<f64, 4>(),
    ]
}

/// 4x4 matrices.
pub fn mat4s() -> Vec<TypeDoc> {
    vec![matrix::<f32, 4>(), matrix::<f64, 4>()]
}

/// Every vector.
pub fn vectors() -> Vec<TypeDoc> {
    [float_vectors(), int_vectors()].concat()
}

/// Every scalar.
pub fn scalars() -> Vec<TypeDoc> {
    [float_scalars(), int_scalars()].concat()
}

/// Every type with floating point elements.
pub fn floats() -> Vec<TypeDoc> {
    [float_scalars(), float_vectors(), matrices()].concat()
}

/// Every type.
pub fn numerics() -> Vec<TypeDoc> {
    [floats(), int_scalars(), int_vectors()].concat()
}

/// Numeric types and `bool`, ordered by `<`.
pub fn comparables() -> Vec<TypeDoc> {
    [numerics(), vec![boolean()]].concat()
}

fn vector_class<E: Element, const N: usize>() -> ClassDoc {
    const NAMES: [&str; 4] = ["x", "y", "z", "w"];

    let name = Vector::<E, N>::class_name();
    let elem = core::any::type_name::<E>();
    let arguments: Vec<String> = NAMES[..N]
        .iter()
        .map(|axis| format!("{axis}: {elem}"))
        .collect();

    let mut members = vec![
        format!("{name}::default() -> {name}"),
        format!("{name}::new({}) -> {name}", arguments.join(", ")),
        format!("{name}::from_array(elements: [{elem}; {N}]) -> {name}"),
    ];
    for axis in &NAMES[..N] {
        members.push(format!("{name}::{axis}(&self) -> {elem}"));
        members.push(format!("{name}::{axis}_mut(&mut self) -> &mut {elem}"));
    }
    members.push(format!("{name}::to_string_with_prefix(&self, prefix: &str) -> String"));

    ClassDoc::new(name.clone(), "types/vector.rs".to_string(), members)
}

fn matrix_class<E: Element, const N: usize>() -> ClassDoc {
    let name = Matrix::<E, N>::class_name();
    let elem = core::any::type_name::<E>();
    let arguments: Vec<String> = (0..N * N)
        .map(|index| format!("element{index}: {elem}"))
        .collect();

    ClassDoc::new(
        name.clone(),
        "types/matrix.rs".to_string(),
        vec![
            format!("{name}::default() -> {name}"),
            format!("{name}::new({}) -> {name}", arguments.join(", ")),
            format!("{name}::from_rows(rows: [[{elem}; {N}]; {N}]) -> {name}"),
            format!("{name}::identity() -> {name}"),
            format!("{name}::row(&self, index: usize) -> Vec{N}{}", E::SUFFIX),
            format!("{name}::column(&self, index: usize) -> Vec{N}{}", E::SUFFIX),
            format!("{name}::to_string_with_prefix(&self, prefix: &str) -> String"),
        ],
    )
}

fn range_class<T: ClassName>(bound: &str) -> ClassDoc {
    let name = Range::<T>::class_name();

    ClassDoc::new(
        name.clone(),
        "types/range.rs".to_string(),
        vec![
            format!("{name}::default() -> {name}"),
            format!("{name}::new(min: {bound}, max: {bound}) -> {name}"),
            format!("{name}::min(&self) -> {bound}"),
            format!("{name}::max(&self) -> {bound}"),
            format!("{name}::is_empty(&self) -> bool"),
        ],
    )
}

/// The documented classes: vectors, matrices and ranges.
pub fn classes() -> Vec<ClassDoc> {
    vec![
        vector_class::<f32, 2>(),
        vector_class::<f32, 3>(),
        vector_class::<f32, 4>(),
        vector_class::<f64, 2>(),
        vector_class::<f64, 3>(),
        vector_class::<f64, 4>(),
        vector_class::<i32, 2>(),
        vector_class::<i32, 3>(),
        vector_class::<i32, 4>(),
        matrix_class::<f32, 3>(),
        matrix_class::<f32, 4>(),
        matrix_class::<f64, 3>(),
        matrix_class::<f64, 4>(),
        range_class::<f32>("f32"),
        range_class::<f64>("f64"),
        range_class::<i32>("i32"),
        range_class::<Vector<f32, 2>>("Vec2f"),
        range_class::<Vector<f32, 3>>("Vec3f"),
        range_class::<Vector<f32, 4>>("Vec4f"),
        range_class::<Vector<i32, 2>>("Vec2i"),
        range_class::<Vector<i32, 3>>("Vec3i"),
        range_class::<Vector<i32, 4>>("Vec4i"),
    ]
}
