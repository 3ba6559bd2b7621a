//! Resolution and initialization of type declarations.
//!
//! [`TypeDeclarationCache`] turns a host class into its canonical declaration.
//! Lookup goes through three tiers:
//!
//! 1. the cache of already initialized declarations;
//! 2. an existing declaration (builtin, or filed in the class's package);
//! 3. a fresh declaration synthesized from the class's own markers.
//!
//! Tiers 2 and 3 initialize the declaration (structure, field positions,
//! modified properties, inherited properties) and store it in the cache.

use typedecl_foundation::{Error, ErrorContext, QualifiedName, ResourceId};
use typedecl_model::{
    ClassDefinition, ClassDefinitionFactory, ClassIntrospector, DeclRef, FieldDefinition,
    HostClass, MethodId, Nature, TypeDeclaration,
};

use crate::builtins::BuiltinRegistry;
use crate::cache::TypeCache;
use crate::closure::{AncestorClosure, ClosureBuilder, lookup_declaration};
use crate::config::BuilderConfig;
use crate::diagnostics::{DiagnosticSink, TypeDeclarationError};
use crate::package::PackageRegistry;

// =============================================================================
// BuildContext
// =============================================================================

/// Collaborators of a single compilation consulted during resolution.
pub struct BuildContext<'a> {
    /// Host class descriptors.
    pub classes: &'a dyn ClassIntrospector,
    /// Per-package declaration tables.
    pub packages: &'a mut dyn PackageRegistry,
    /// Receiver of structural diagnostics.
    pub diagnostics: &'a mut dyn DiagnosticSink,
}

impl<'a> BuildContext<'a> {
    /// Bundles the collaborators.
    #[must_use]
    pub fn new(
        classes: &'a dyn ClassIntrospector,
        packages: &'a mut dyn PackageRegistry,
        diagnostics: &'a mut dyn DiagnosticSink,
    ) -> Self {
        Self {
            classes,
            packages,
            diagnostics,
        }
    }
}

// =============================================================================
// TypeDeclarationCache
// =============================================================================

/// Resolver and cache of type declarations for one compilation unit.
#[derive(Debug, Default)]
pub struct TypeDeclarationCache {
    config: BuilderConfig,
    builtins: BuiltinRegistry,
    cache: TypeCache,
}

impl TypeDeclarationCache {
    /// Creates a resolver with the builtin declarations seeded.
    #[must_use]
    pub fn new(config: BuilderConfig) -> Self {
        Self {
            config,
            builtins: BuiltinRegistry::new(),
            cache: TypeCache::new(),
        }
    }

    /// Builder configuration in effect.
    #[must_use]
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// The builtin declarations.
    #[must_use]
    pub fn builtins(&self) -> &BuiltinRegistry {
        &self.builtins
    }

    /// Looks up a builtin declaration by identity.
    #[must_use]
    pub fn builtin(&self, name: &QualifiedName) -> Option<DeclRef> {
        self.builtins.get(name)
    }

    /// Looks up an initialized declaration without resolving.
    #[must_use]
    pub fn cached(&self, name: &QualifiedName) -> Option<DeclRef> {
        self.cache.get(name)
    }

    /// Number of initialized declarations.
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    // -------------------------------------------------------------------------
    // Entry points
    // -------------------------------------------------------------------------

    /// Resolves the declaration for `class` and files it under `package`
    /// when it was declared in rule source or the class lives in `package`.
    ///
    /// Returns `None` for primitive and array types.
    pub fn resolve_and_register(
        &mut self,
        ctx: &mut BuildContext<'_>,
        class: &HostClass,
        package: &str,
    ) -> Option<DeclRef> {
        if class.is_primitive_or_array() {
            return None;
        }

        if let Some(decl) = self.cache.get(&class.name) {
            tracing::debug!(class = %class.name, "resolve: cache HIT");
            Self::register(ctx.packages, package, &decl);
            return Some(decl);
        }

        if let Some(decl) = lookup_declaration(&self.builtins, &*ctx.packages, &class.name) {
            tracing::debug!(class = %class.name, "resolve: existing declaration");
            self.initialize(ctx, class, &decl);
            return Some(decl);
        }

        let decl = self.create_for_bean(class);
        self.initialize(ctx, class, &decl);
        Self::register(ctx.packages, package, &decl);
        Some(decl)
    }

    /// Resolves the declaration for `class` without touching package tables.
    ///
    /// Returns `None` for primitive and array types.
    pub fn resolve(&mut self, ctx: &mut BuildContext<'_>, class: &HostClass) -> Option<DeclRef> {
        if class.is_primitive_or_array() {
            return None;
        }

        if let Some(decl) = self.cache.get(&class.name) {
            tracing::debug!(class = %class.name, "resolve: cache HIT");
            return Some(decl);
        }

        let decl = match lookup_declaration(&self.builtins, &*ctx.packages, &class.name) {
            Some(decl) => {
                tracing::debug!(class = %class.name, "resolve: existing declaration");
                decl
            }
            None => self.create_for_bean(class),
        };
        self.initialize(ctx, class, &decl);
        Some(decl)
    }

    /// Drops every cached declaration produced from `resource`, and unfiles
    /// those declarations from `packages`. Returns the number dropped from
    /// the cache.
    pub fn remove_types_generated_from_resource(
        &mut self,
        packages: &mut dyn PackageRegistry,
        resource: &ResourceId,
    ) -> usize {
        let removed = self.cache.remove_types_from_resource(resource);
        let unfiled = packages.remove_types_generated_from_resource(resource);
        tracing::debug!(%resource, removed, unfiled, "invalidated declarations");
        removed
    }

    // -------------------------------------------------------------------------
    // Registration and synthesis
    // -------------------------------------------------------------------------

    fn register(packages: &mut dyn PackageRegistry, package: &str, decl: &DeclRef) {
        let eligible = {
            let d = decl.borrow();
            d.nature() == Nature::Declared || d.type_class().is_some_and(|c| c.package() == package)
        };
        if !eligible {
            return;
        }
        if !packages.has_package(package) {
            packages.new_package(package);
        }
        packages.add_type_declaration(package, decl.clone());
    }

    fn create_for_bean(&self, class: &HostClass) -> DeclRef {
        tracing::debug!(class = %class.name, "resolve: cache MISS, synthesizing declaration");

        let mut decl = TypeDeclaration::discovered(class.name.clone());
        if let Some(resource) = &class.resource {
            decl = decl.with_resource(resource.clone());
        }

        let property_reactive = self.config.property_specific.is_prop_specific(
            class.markers.property_reactive,
            class.markers.class_reactive,
        );
        decl.set_property_reactive(property_reactive);

        if let Some(role) = class.markers.role {
            decl.set_role(role);
        }

        decl.into_ref()
    }

    // -------------------------------------------------------------------------
    // Initialization
    // -------------------------------------------------------------------------

    fn initialize(&mut self, ctx: &mut BuildContext<'_>, class: &HostClass, decl: &DeclRef) {
        // Diagnostics are reported after the declaration is released, so a
        // sink may read it.
        let errors = {
            let mut d = decl.borrow_mut();

            if d.class_def().is_none() {
                let mut def = ClassDefinition::new();
                ClassDefinitionFactory::populate_from_class(
                    &mut def,
                    class,
                    ctx.classes,
                    class.markers.is_trait,
                );
                d.set_class_def(def);
            }

            let property_reactive = d.is_property_reactive();
            let errors = match d.class_def_mut() {
                Some(def) => {
                    if property_reactive {
                        Self::process_modified_props(class, def);
                    }
                    Self::process_fields_position(ctx.classes, class, def)
                }
                None => Vec::new(),
            };
            errors
        };

        let type_name = decl.type_name();
        for error in errors {
            Self::report(ctx, class, &type_name, error);
        }

        let closure = ClosureBuilder::new(&self.builtins, &*ctx.packages, ctx.classes)
            .build(class, decl.clone());
        if !self.builtins.is_builtin(decl) {
            Self::merge_inherited(&closure, decl);
        }

        self.cache.insert(class.name.clone(), decl.clone());
    }

    /// Applies position markers from the flattened host fields onto `def`,
    /// returning the rejected markers.
    fn process_fields_position(
        classes: &dyn ClassIntrospector,
        class: &HostClass,
        def: &mut ClassDefinition,
    ) -> Vec<Error> {
        let fields = ClassDefinitionFactory::flatten_fields(class, classes);
        let mut claimed = vec![false; fields.len()];
        let mut errors = Vec::new();

        for field in &fields {
            let Some(position) = field.position else {
                continue;
            };

            let Some(slot) = usize::try_from(position).ok().filter(|&p| p < fields.len()) else {
                errors.push(Error::out_of_range_position(position, &field.name, class.name.as_str()));
                continue;
            };

            if claimed[slot] {
                errors.push(Error::duplicate_position(position, &field.name, class.name.as_str()));
                continue;
            }
            claimed[slot] = true;

            if !def.set_field_index(&field.name, slot) {
                def.add_field(FieldDefinition::new(&field.name, &field.type_name).at(slot));
            }
        }
        errors
    }

    fn report(
        ctx: &mut BuildContext<'_>,
        class: &HostClass,
        type_name: &QualifiedName,
        error: Error,
    ) {
        let mut context = ErrorContext::new().with_frame(class.name.as_str());
        if let Some(resource) = &class.resource {
            context = context.with_resource(resource.as_str());
        }
        let error = error.with_context(context);
        tracing::warn!(type_name = %type_name, %error, "type declaration error");
        ctx.diagnostics
            .report(TypeDeclarationError::new(type_name.clone(), error));
    }

    /// Records what each declared method says it modifies.
    fn process_modified_props(class: &HostClass, def: &mut ClassDefinition) {
        for method in &class.methods {
            let Some(modifies) = &method.modifies else {
                continue;
            };
            let properties: Vec<String> = modifies
                .iter()
                .flat_map(|entry| entry.split(','))
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(String::from)
                .collect();
            if properties.is_empty() {
                continue;
            }
            def.add_modified_props_by_method(
                MethodId::new(&method.name, method.parameter_types.clone()),
                properties,
            );
        }
    }

    /// Copies explicitly set ancestor properties onto the subject, farthest
    /// ancestor first so nearer ancestors win.
    fn merge_inherited(closure: &AncestorClosure, decl: &DeclRef) {
        for ancestor in closure.farthest_first() {
            if ancestor.ptr_eq(decl) {
                continue;
            }
            let settings = *ancestor.borrow().settings();
            decl.borrow_mut().inherit_from(&settings);
        }
        tracing::trace!(
            type_name = %decl.type_name(),
            settings = ?decl.borrow().settings(),
            "merged inherited properties"
        );
    }
}
