//! Built-in template set for the standard sub-generators.
//!
//! Template ids mirror the planned file names with the name part replaced
//! by the generator id: `cp.js`, `cp.spec.js`, `cp.html`, `_cp.scss`, and
//! so on. A custom template root can shadow any of these with a file of
//! the same name.

const CP_JS: &str = r#"'use strict';

angular.module('{{scriptAppName}}')
    .directive('{{cameledName}}', function () {
        return {
            restrict: 'E',
            {{#tplUrl}}templateUrl: '{{tplUrl}}',
            {{/tplUrl}}scope: {},
            controller: function () {
                var {{cameledName}} = this;
                {{cameledName}}.name = '{{humanizedName}}';
            },
            controllerAs: '{{cameledName}}'
        };
    });
"#;

const CP_SPEC_JS: &str = r#"'use strict';

describe('Directive: {{cameledName}}', function () {

    beforeEach(module('{{scriptAppName}}'));

    var element;
    var scope;

    beforeEach(inject(function ($rootScope) {
        scope = $rootScope.$new();
    }));

    it('should render the element', inject(function ($compile) {
        element = angular.element('<{{dashedName}}></{{dashedName}}>');
        element = $compile(element)(scope);
        expect(element).toBeDefined();
    }));
});
"#;

const CP_HTML: &str = r#"<div class="{{dashedName}}">
    <p>{{cameledName}} works!</p>
</div>
"#;

const CP_SCSS: &str = r#".{{dashedName}} {
}
"#;

const RT_JS: &str = r#"'use strict';

angular.module('{{scriptAppName}}')
    .config(function ($routeProvider) {
        $routeProvider.when('/{{sluggedName}}', {
            {{#tplUrl}}templateUrl: '{{tplUrl}}',
            {{/tplUrl}}controller: '{{classedName}}Ctrl',
            controllerAs: '{{cameledName}}'
        });
    })
    .controller('{{classedName}}Ctrl', function () {
        var {{cameledName}} = this;
        {{cameledName}}.name = '{{humanizedName}}';
    });
"#;

const RT_SPEC_JS: &str = r#"'use strict';

describe('Controller: {{classedName}}Ctrl', function () {

    beforeEach(module('{{scriptAppName}}'));

    var ctrl;

    beforeEach(inject(function ($controller, $rootScope) {
        ctrl = $controller('{{classedName}}Ctrl', {
            $scope: $rootScope.$new()
        });
    }));

    it('should exist', function () {
        expect(ctrl).toBeDefined();
    });
});
"#;

const RT_HTML: &str = r#"<div class="{{dashedName}}">
    <p>{{cameledName}} works!</p>
</div>
"#;

const RT_SCSS: &str = r#".{{dashedName}} {
}
"#;

const SERVICE_JS: &str = r#"'use strict';

angular.module('{{scriptAppName}}')
    .service('{{svcName}}', function () {
        this.get = function () {
        };
    });
"#;

const SERVICE_SPEC_JS: &str = r#"'use strict';

describe('Service: {{svcName}}', function () {

    beforeEach(module('{{scriptAppName}}'));

    var service;

    beforeEach(inject(function ({{svcName}}) {
        service = {{svcName}};
    }));

    it('should exist', function () {
        expect(!!service).toBe(true);
    });
});
"#;

const FACTORY_JS: &str = r#"'use strict';

angular.module('{{scriptAppName}}')
    .factory('{{svcName}}', function () {
        var exports = {};
        return exports;
    });
"#;

const FACTORY_SPEC_JS: &str = r#"'use strict';

describe('Factory: {{svcName}}', function () {

    beforeEach(module('{{scriptAppName}}'));

    var factory;

    beforeEach(inject(function ({{svcName}}) {
        factory = {{svcName}};
    }));

    it('should exist', function () {
        expect(!!factory).toBe(true);
    });
});
"#;

/// Look up a built-in template source by id.
pub fn builtin_template(template_id: &str) -> Option<&'static str> {
    match template_id {
        "cp.js" => Some(CP_JS),
        "cp.spec.js" => Some(CP_SPEC_JS),
        "cp.html" => Some(CP_HTML),
        "_cp.scss" => Some(CP_SCSS),
        "rt.js" => Some(RT_JS),
        "rt.spec.js" => Some(RT_SPEC_JS),
        "rt.html" => Some(RT_HTML),
        "_rt.scss" => Some(RT_SCSS),
        "service.js" => Some(SERVICE_JS),
        "service.spec.js" => Some(SERVICE_SPEC_JS),
        "factory.js" => Some(FACTORY_JS),
        "factory.spec.js" => Some(FACTORY_SPEC_JS),
        _ => None,
    }
}

/// Ids of every built-in template, for preloading test stores.
pub(crate) const BUILTIN_IDS: &[&str] = &[
    "cp.js",
    "cp.spec.js",
    "cp.html",
    "_cp.scss",
    "rt.js",
    "rt.spec.js",
    "rt.html",
    "_rt.scss",
    "service.js",
    "service.spec.js",
    "factory.js",
    "factory.spec.js",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_id_resolves() {
        for id in BUILTIN_IDS {
            assert!(builtin_template(id).is_some(), "missing builtin {id}");
        }
    }

    #[test]
    fn unknown_id_is_none() {
        assert!(builtin_template("widget.js").is_none());
    }

    #[test]
    fn scripts_register_against_the_app_module() {
        for id in ["cp.js", "rt.js", "service.js", "factory.js"] {
            let source = builtin_template(id).unwrap();
            assert!(
                source.contains("angular.module('{{scriptAppName}}')"),
                "{id} must register against the app module"
            );
        }
    }

    #[test]
    fn view_capable_scripts_guard_template_url() {
        for id in ["cp.js", "rt.js"] {
            let source = builtin_template(id).unwrap();
            assert!(source.contains("{{#tplUrl}}"), "{id} must guard templateUrl");
            assert!(source.contains("{{/tplUrl}}"), "{id} must close the guard");
        }
    }
}
